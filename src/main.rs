/*!
 * procsim - Interactive Console
 *
 * Line-oriented task manager:
 * - Live process table (pid, name, status, cpu%, mem%)
 * - Operator-curated selection queue
 * - FIFO/LIFO replay and side-by-side comparison
 * - Process termination
 */

use std::io::{self, BufRead, Write};

use procsim::{
    EventSink, ExtractionOrder, Pid, ProcessRef, ProcessSample, RunSummary, SimulationStep,
    SystemProvider, TaskManager,
};

/// Sink that renders engine and selection events to stdout
struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn on_step(&mut self, step: &SimulationStep) {
        match &step.live_name {
            Some(live_name) => println!(
                "  [{}] dispatched {}: {} ({} remaining)",
                step.index, step.process.pid, live_name, step.remaining
            ),
            None => println!(
                "  [{}] {} vanished before dispatch ({} remaining)",
                step.index, step.process, step.remaining
            ),
        }
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        println!(
            "{} run complete: {} dispatched, {} vanished",
            summary.order, summary.total, summary.vanished
        );
    }

    fn on_selection_changed(&mut self, selection: &[ProcessRef]) {
        if selection.is_empty() {
            println!("Selection is empty");
        } else {
            println!("Selected processes:");
            for entry in selection {
                println!("  {}", entry);
            }
        }
    }
}

fn truncated(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let head: String = name.chars().take(max - 1).collect();
        format!("{head}~")
    }
}

fn print_table(rows: &[ProcessSample]) {
    println!(
        "{:>8}  {:<32} {:<14} {:>8} {:>8}",
        "PID", "NAME", "STATUS", "CPU%", "MEM%"
    );
    for row in rows {
        println!(
            "{:>8}  {:<32} {:<14} {:>8.2} {:>8.2}",
            row.pid,
            truncated(&row.name, 32),
            truncated(&row.status, 14),
            row.cpu_percent,
            row.memory_percent
        );
    }
    println!("{} processes", rows.len());
}

fn print_help() {
    println!("Commands:");
    println!("  ps             refresh and show the process table");
    println!("  json           refresh and show the table as JSON");
    println!("  select <pid>   append a process from the table to the selection");
    println!("  clear          drop the entire selection");
    println!("  fifo           replay the selection first-in-first-out (consumes it)");
    println!("  lifo           replay the selection last-in-first-out (consumes it)");
    println!("  compare        show FIFO and LIFO orders side by side (keeps it)");
    println!("  kill <pid>     terminate an OS process");
    println!("  help           show this help");
    println!("  quit           exit");
}

fn parse_pid(arg: Option<&str>) -> Option<Pid> {
    arg.and_then(|raw| raw.parse::<Pid>().ok())
}

fn main() -> io::Result<()> {
    env_logger::init();

    let mut manager = TaskManager::new(SystemProvider::new(), ConsoleSink);
    // Last refreshed table; selection picks rows from it, like the original UI
    let mut table: Vec<ProcessSample> = Vec::new();

    println!("procsim console - type 'help' for commands");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let mut words = line.split_whitespace();
        let command = match words.next() {
            Some(word) => word,
            None => continue,
        };
        let arg = words.next();

        match command {
            "ps" => {
                table = manager.refresh();
                print_table(&table);
            }
            "json" => {
                table = manager.refresh();
                match serde_json::to_string_pretty(&table) {
                    Ok(rendered) => println!("{rendered}"),
                    Err(err) => println!("JSON rendering failed: {err}"),
                }
            }
            "select" => match parse_pid(arg) {
                Some(pid) => match table.iter().find(|row| row.pid == pid) {
                    Some(row) => {
                        let name = row.name.clone();
                        if let Err(err) = manager.select(pid, name) {
                            println!("{err}");
                        }
                    }
                    None => println!("Process {pid} is not in the current table; run 'ps' first"),
                },
                None => println!("Usage: select <pid>"),
            },
            "clear" => manager.clear_selection(),
            "fifo" | "lifo" => {
                let order = if command == "fifo" {
                    ExtractionOrder::Fifo
                } else {
                    ExtractionOrder::Lifo
                };
                println!("{order} simulation");
                let summary = manager.simulate(order);
                if summary.nothing_to_simulate {
                    println!("No processes selected to simulate");
                }
            }
            "compare" => match manager.compare() {
                Ok(comparison) => {
                    println!("{:<44} {}", "FIFO order", "LIFO order");
                    for (fifo, lifo) in comparison.fifo.iter().zip(&comparison.lifo) {
                        println!("{:<44} {}", fifo.to_string(), lifo);
                    }
                }
                Err(err) => println!("{err}"),
            },
            "kill" => match parse_pid(arg) {
                Some(pid) => match manager.terminate(pid) {
                    Ok(refreshed) => {
                        println!("Process {pid} terminated");
                        table = refreshed;
                        print_table(&table);
                    }
                    Err(err) => println!("{err}"),
                },
                None => println!("Usage: kill <pid>"),
            },
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("Unknown command '{other}'; type 'help'"),
        }
    }

    Ok(())
}
