use clap::Parser;
use crossterm::style::Stylize;
use slang_core::config::{Cli, Config, OutputFormat};
use slang_core::translator::FAREWELL;
use slang_core::SlangTranslator;
use std::io::{self, stdin, stdout, BufRead, IsTerminal, Write};
use std::process::ExitCode;

const COMMANDS: [&str; 6] = ["translate", "search", "random", "safe-terms", "help", "exit"];

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbosity = Config { verbose: cli.verbose, ..Config::default() };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(verbosity.log_filter()))
        .init();
    let config = Config::from(&cli);

    let mut translator = match SlangTranslator::from_config(&config) {
        Ok(translator) => translator,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("lexicon ready with {} terms", translator.lexicon().len());

    let outcome = if cli.command.is_empty() {
        run_interactive(&mut translator, &config)
    } else {
        run_once(&mut translator, &cli.command.join(" "), config.output)
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_once(translator: &mut SlangTranslator, line: &str, output: OutputFormat) -> io::Result<()> {
    let mut out = stdout().lock();
    match output {
        OutputFormat::Text => writeln!(out, "{}", translator.run_command(line)),
        OutputFormat::Json => {
            let json = match SlangTranslator::parse_translate(line) {
                Some((term, region)) => serde_json::to_string_pretty(&translator.translate(term, region)),
                None => serde_json::to_string_pretty(&translator.run_command(line)),
            }
            .map_err(io::Error::other)?;
            writeln!(out, "{}", json)
        }
    }
}

fn run_interactive(translator: &mut SlangTranslator, config: &Config) -> io::Result<()> {
    let styled = stdout().is_terminal();

    println!("🗺️ The Local Guide: Bengali Slang Translator");
    println!("Kiro - The Local Dada is ready to help!");
    println!("Type a slang term, \"help\" for commands, \"exit\" to quit.");
    if let Some(region) = config.region {
        println!("Bare terms are explained for {}.", region);
    }
    println!("---------------------------------------------------------------");
    prompt()?;

    for line in stdin().lock().lines() {
        let input = line?;
        let cmd = input.trim();

        let response = match cmd {
            "" => "Dada, please enter something!".to_string(),
            c if c.eq_ignore_ascii_case("exit") => {
                println!("\n{}", FAREWELL);
                return Ok(());
            }
            c if is_command(c) => translator.run_command(c),
            // Anything else is looked up directly
            c => translator.translate(c, config.region).formatted_response,
        };

        print_response(&response, styled);
        prompt()?;
    }

    println!("\n{}", FAREWELL);
    Ok(())
}

fn is_command(line: &str) -> bool {
    let first = line.split_whitespace().next().unwrap_or("");
    COMMANDS.iter().any(|c| c.eq_ignore_ascii_case(first))
}

fn print_response(response: &str, styled: bool) {
    println!("\n{}", "─".repeat(60));
    for line in response.lines() {
        if !styled {
            println!("{}", line);
        } else if line.starts_with("⚠️") {
            println!("{}", line.yellow().bold());
        } else if line.starts_with("**") {
            println!("{}", line.bold());
        } else {
            println!("{}", line);
        }
    }
    println!("{}\n", "─".repeat(60));
}

fn prompt() -> io::Result<()> {
    print!("> ");
    stdout().flush()
}
