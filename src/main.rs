use std::io::{BufRead, Write};
use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use websim::{Output, Shell};

/// Delay between transcript lines, mirroring the scripted playback pace.
const TRANSCRIPT_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Parser)]
#[command(name = "websim")]
#[command(about = "A simulated web terminal shell")]
#[command(version)]
struct Cli {
    /// Execute a single command line and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// Output the result as JSON (output, error, cwd)
    #[arg(long = "json")]
    json: bool,
}

#[derive(serde::Serialize)]
struct JsonResult<'a> {
    output: String,
    error: String,
    cwd: &'a str,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let mut shell = Shell::new();

    if let Some(line) = cli.command {
        let output = shell.execute(&line).await;
        if cli.json {
            let (text, error) = match &output {
                Output::Text(t) => (t.clone(), String::new()),
                Output::Error(e) => (String::new(), e.clone()),
                Output::Clear => (String::new(), String::new()),
                Output::Transcript(lines) => (lines.join("\n"), String::new()),
            };
            let result = JsonResult {
                output: text,
                error,
                cwd: shell.cwd(),
            };
            println!("{}", serde_json::to_string(&result).unwrap_or_default());
        } else {
            render(&output).await;
        }
        std::process::exit(match output {
            Output::Error(_) => 1,
            _ => 0,
        });
    }

    banner();

    let stdin = std::io::stdin();
    loop {
        print!("{}", shell.prompt());
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let output = shell.execute(&line).await;
        render(&output).await;
    }
}

fn banner() {
    println!("{}", "WEB TERMINAL WSL".bold().white());
    println!("------------------------------------------------------------------");
    println!("Write 'help' to get started!");
    println!("------------------------------------------------------------------");
}

async fn render(output: &Output) {
    match output {
        Output::Text(text) => {
            if !text.is_empty() {
                println!("{}", text);
            }
        }
        Output::Error(message) => {
            println!("{}", message.red());
        }
        Output::Clear => {
            // ANSI escape sequence to clear screen and move cursor to top-left
            print!("\x1B[2J\x1B[H");
            let _ = std::io::stdout().flush();
        }
        Output::Transcript(lines) => {
            println!();
            for line in *lines {
                println!("{}", line);
                let _ = std::io::stdout().flush();
                tokio::time::sleep(TRANSCRIPT_INTERVAL).await;
            }
        }
    }
}
