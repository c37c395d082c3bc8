use chrono::Local;
use clap::Parser;
use moodj::application::{EntryTarget, EntryUpdate, JournalService, Listing, NewEntry};
use moodj::cli::{confirm, format_entry_detail, format_entry_list, format_stats, Cli, Commands, Menu};
use moodj::domain::{parse_date, DateRange, JournalEntry};
use moodj::error::MoodjError;
use moodj::infrastructure::{Config, JsonFileRepository};
use std::io::{self, Write};
use uuid::Uuid;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MoodjError> {
    let config = Config::resolve(cli.config.as_deref(), cli.file)?;
    let command = cli.command.unwrap_or(Commands::Menu);

    if let Commands::Config = command {
        println!("data_file = {}", config.data_file.display());
        println!("stats_days = {}", config.stats_days);
        match &config.source {
            Some(path) => println!("config = {}", path.display()),
            None => println!("config = (defaults)"),
        }
        return Ok(());
    }

    let repo = JsonFileRepository::new(config.data_file.clone());
    let (mut service, warning) = JournalService::open(repo);
    if let Some(warning) = warning {
        eprintln!("Warning: {}", warning);
    }

    let today = Local::now().date_naive();

    match command {
        Commands::Add {
            mood,
            date,
            title,
            notes,
            tags,
        } => {
            let raw_date = date.clone();
            let added = service.add(
                NewEntry {
                    date,
                    mood,
                    title,
                    notes,
                    tags,
                },
                today,
            )?;
            if added.date_fallback {
                eprintln!(
                    "Warning: could not read date '{}'; using today ({})",
                    raw_date.unwrap_or_default().trim(),
                    added.entry.date.format("%Y-%m-%d")
                );
            }
            if let Some(e) = added.save_error {
                return Err(e);
            }
            println!(
                "Added entry {} for {} (mood {}/10)",
                added.entry.id,
                added.entry.date.format("%Y-%m-%d"),
                added.entry.mood
            );
            Ok(())
        }
        Commands::List {
            date,
            range,
            tag,
            limit,
        } => {
            let listing = if let Some(raw) = date {
                Listing::OnDate(parse_date(&raw, today)?)
            } else if let Some(raw) = range {
                Listing::Range(DateRange::parse(&raw, today)?)
            } else if let Some(tag) = tag {
                Listing::Tag(tag)
            } else {
                Listing::All
            };

            // Positions always refer to the unfiltered listing so that
            // `edit`/`delete` can resolve them the same way.
            let order = default_order(&service)?;
            let rows: Vec<(usize, &JournalEntry)> = service
                .list(&listing)?
                .into_iter()
                .map(|e| (position_of(&order, e.id), e))
                .take(limit.unwrap_or(usize::MAX))
                .collect();

            println!("{}", format_entry_list(&rows).trim_end());
            Ok(())
        }
        Commands::Show { target } => {
            let id = resolve_target(&service, &target)?;
            print!("{}", format_entry_detail(service.get(id)?));
            Ok(())
        }
        Commands::Edit {
            target,
            date,
            mood,
            title,
            notes,
            tags,
        } => {
            let id = resolve_target(&service, &target)?;
            let update = EntryUpdate {
                date,
                mood,
                title,
                notes,
                tags,
            };
            if update.is_empty() {
                println!("Nothing to change");
                return Ok(());
            }
            let entry = service.edit(id, update, today)?;
            println!("Updated entry {}", entry.id);
            print!("{}", format_entry_detail(&entry));
            Ok(())
        }
        Commands::Delete { target, yes } => {
            let id = resolve_target(&service, &target)?;
            let entry = service.get(id)?;
            let question = format!(
                "Delete '{}' from {}?",
                entry.title,
                entry.date.format("%Y-%m-%d")
            );
            if !yes && !ask(&question)? {
                println!("Cancelled");
                return Ok(());
            }
            let removed = service.delete(id)?;
            println!("Deleted entry {}", removed.id);
            Ok(())
        }
        Commands::Stats { range, days } => {
            let range = match range {
                Some(raw) => DateRange::parse(&raw, today)?,
                None => DateRange::last_days(days.unwrap_or(config.stats_days), today),
            };
            print!("{}", format_stats(&service.stats(range)));
            Ok(())
        }
        Commands::Export { path } => {
            let count = service.export(&path)?;
            println!("Exported {} entries to {}", count, path.display());
            Ok(())
        }
        Commands::Reset { yes } => {
            let question = format!(
                "Delete all {} entries and {}?",
                service.entries().len(),
                service.location().display()
            );
            if !yes && !ask(&question)? {
                println!("Cancelled");
                return Ok(());
            }
            service.reset()?;
            println!("Journal reset");
            Ok(())
        }
        Commands::Menu => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Menu::new(&mut service, stdin.lock(), stdout.lock(), config.stats_days).run()
        }
        Commands::Config => Ok(()),
    }
}

fn default_order(service: &JournalService<JsonFileRepository>) -> Result<Vec<Uuid>, MoodjError> {
    Ok(service.list(&Listing::All)?.iter().map(|e| e.id).collect())
}

fn position_of(order: &[Uuid], id: Uuid) -> usize {
    order.iter().position(|o| *o == id).map_or(0, |i| i + 1)
}

fn resolve_target(
    service: &JournalService<JsonFileRepository>,
    raw: &str,
) -> Result<Uuid, MoodjError> {
    let target: EntryTarget = raw.parse()?;
    service.resolve(target, &default_order(service)?)
}

fn ask(question: &str) -> Result<bool, MoodjError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let answer = confirm(&mut stdin.lock(), &mut stdout, question)?;
    stdout.flush()?;
    Ok(answer)
}
