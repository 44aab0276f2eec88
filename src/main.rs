//! # Task Scheduler - Entry Point
//! src/main.rs
//!
//! Punto de entrada del planificador de tareas. Presenta un menú
//! interactivo para ejercitar todas las operaciones; el estado se carga
//! al arrancar y se guarda automáticamente tras cada cambio.

use std::io::{self, BufRead, Write};

use task_scheduler::config::Config;
use task_scheduler::scheduler::{Scheduler, StateManager};

fn print_menu() {
    println!("\n{}", "=".repeat(60));
    println!("     TASK SCHEDULER & JOB HISTORY MANAGER");
    println!("{}", "=".repeat(60));
    println!("1.  Submit a new task");
    println!("2.  Run next task");
    println!("3.  Run all pending tasks");
    println!("4.  View execution history");
    println!("5.  Search for a job by ID");
    println!("6.  View last N tasks");
    println!("7.  Remove job from hash table");
    println!("8.  Display queue status");
    println!("9.  Display statistics");
    println!("0.  Exit");
    println!("{}", "=".repeat(60));
}

/// Lee una línea de stdin con un prompt; None en EOF
fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

fn submit_task_menu(scheduler: &mut Scheduler) {
    let Some(job_id) = read_line("Enter job ID to submit: ") else {
        return;
    };
    if job_id.is_empty() {
        println!("Error: Job ID cannot be empty.");
        return;
    }

    if scheduler.submit_task(&job_id) {
        println!("✓ Task '{}' successfully submitted to queue.", job_id);
    } else {
        println!("✗ Failed to submit task '{}'.", job_id);
    }
}

fn run_next_task_menu(scheduler: &mut Scheduler) {
    if scheduler.get_queue_size() == 0 {
        println!("No tasks in queue to execute.");
        return;
    }

    match scheduler.run_next_task() {
        Some(job_id) => {
            println!(
                "✓ Task '{}' executed successfully and added to history.",
                job_id
            );
        }
        None => println!("No task was executed."),
    }
}

fn run_all_tasks_menu(scheduler: &mut Scheduler) {
    let queue_size = scheduler.get_queue_size();
    if queue_size == 0 {
        println!("No tasks in queue to execute.");
        return;
    }

    println!("Executing {} task(s)...", queue_size);
    let count = scheduler.run_all();
    println!("✓ Successfully executed {} task(s).", count);
}

fn search_job_menu(scheduler: &Scheduler) {
    let Some(job_id) = read_line("Enter job ID to search: ") else {
        return;
    };
    if job_id.is_empty() {
        println!("Error: Job ID cannot be empty.");
        return;
    }

    match scheduler.find_job(&job_id) {
        Some(record) => {
            println!("\n=== Job Details ===");
            println!("job_id: {}", record.job_id);
            println!("status: {}", record.status.as_str());
            println!("submitted_at: {}", record.submitted_at);
            if let Some(completed_at) = &record.completed_at {
                println!("completed_at: {}", completed_at);
            }
            println!("{}", "=".repeat(50));
        }
        None => println!("Job '{}' not found.", job_id),
    }
}

fn view_last_n_menu(scheduler: &Scheduler) {
    let Some(input) = read_line("Enter number of recent tasks to view: ") else {
        return;
    };

    let n: usize = match input.parse() {
        Ok(0) | Err(_) => {
            println!("Error: Please enter a valid positive number.");
            return;
        }
        Ok(n) => n,
    };

    let tasks = scheduler.get_last_n_tasks(n);
    if tasks.is_empty() {
        println!("No tasks in history.");
        return;
    }

    println!("\n=== Last {} Tasks ===", n);
    for (i, (job_id, timestamp)) in tasks.iter().enumerate() {
        println!("{}. Job ID: {} | Timestamp: {}", i + 1, job_id, timestamp);
    }
    println!("{}", "=".repeat(50));
}

fn remove_job_menu(scheduler: &mut Scheduler) {
    let Some(job_id) = read_line("Enter job ID to remove: ") else {
        return;
    };
    if job_id.is_empty() {
        println!("Error: Job ID cannot be empty.");
        return;
    }

    if scheduler.remove_job(&job_id) {
        println!("✓ Job '{}' successfully removed from hash table.", job_id);
    } else {
        println!("✗ Job '{}' not found in hash table.", job_id);
    }
}

fn display_statistics(scheduler: &Scheduler) {
    println!("\n=== Scheduler Statistics ===");
    println!("Pending tasks in queue: {}", scheduler.get_queue_size());
    println!("Jobs in hash table: {}", scheduler.get_job_count());
    println!(
        "Completed tasks in history: {}",
        scheduler.get_history_size()
    );
    println!("{}", "=".repeat(50));
}

fn main() {
    let config = Config::new();
    if let Err(e) = config.validate() {
        eprintln!("💥 Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let mut scheduler = Scheduler::new(StateManager::new(&config.state_file));

    // Carga automática del estado al arrancar; su ausencia no es error
    if scheduler.load_state() {
        println!("App state loaded successfully.");
    } else {
        println!("Starting with a fresh state.");
    }

    println!("\nWelcome to Task Scheduler & Job History Manager!");
    println!("This application demonstrates Queue, Linked List, and Hash Table data structures.");
    println!("Note: Application state is automatically saved after any change and loaded on startup.");

    loop {
        print_menu();

        let Some(choice) = read_line("\nEnter your choice: ") else {
            // EOF: salir limpiamente
            println!("\nThank you for using Task Scheduler! Goodbye.");
            break;
        };

        match choice.as_str() {
            "0" => {
                println!("\nThank you for using Task Scheduler! Goodbye.");
                break;
            }
            "1" => submit_task_menu(&mut scheduler),
            "2" => run_next_task_menu(&mut scheduler),
            "3" => run_all_tasks_menu(&mut scheduler),
            "4" => scheduler.display_history(),
            "5" => search_job_menu(&scheduler),
            "6" => view_last_n_menu(&scheduler),
            "7" => remove_job_menu(&mut scheduler),
            "8" => scheduler.display_queue(),
            "9" => display_statistics(&scheduler),
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
