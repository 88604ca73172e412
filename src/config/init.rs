use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{get_config_path, Config, PlayerConfig, RaceConfig};
use crate::scoring::{Tier, PODIUM_SIZE};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Print text with a typewriter effect, one character at a time.
fn typewriter(text: &str) {
    use std::thread;
    use std::time::Duration;
    for c in text.chars() {
        print!("{}", c);
        std::io::stdout().flush().ok();
        thread::sleep(Duration::from_millis(18));
    }
    println!();
}

/// Parse a comma-separated podium ("Pogacar, Vingegaard, Evenepoel").
fn parse_picks(input: &str) -> Result<Vec<String>, String> {
    let picks: Vec<String> = input
        .split(',')
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();
    if picks.len() != PODIUM_SIZE {
        return Err(format!(
            "need exactly {} names separated by commas, got {}",
            PODIUM_SIZE,
            picks.len()
        ));
    }
    Ok(picks)
}

/// Run the interactive init wizard to create a pool config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    typewriter("Velopool Configuration Wizard");
    println!("=============================");
    println!();

    // 1. Tier
    typewriter("The tier picks the point table your pool plays under.");
    typewriter("  gold   -- high stakes: bigger podium points, harsher displacement penalty");
    typewriter("  silver -- the middle road");
    typewriter("  bronze -- casual: 5/4/3 podium points, gentle penalty");
    let tier = loop {
        let input = prompt_with_default("Tier", "bronze")?;
        match input.parse::<Tier>() {
            Ok(t) => break t,
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    };

    // 2. Race
    println!();
    typewriter("Which race is the pool predicting? Use the name as the results site spells it.");
    let race_name = loop {
        let name = prompt("Race name (e.g. 'Tour de France'): ")?;
        if !name.is_empty() {
            break name;
        }
        println!("  Race name is required.");
    };
    let race_year = loop {
        let year = prompt_with_default("Edition year", "2026")?;
        if year.chars().all(|c| c.is_ascii_digit()) && !year.is_empty() {
            break year;
        }
        println!("  Invalid: year must be digits. Try again.");
    };

    // 3. Players (at least one required)
    println!();
    typewriter("Now the players. Each picks a podium: winner, second, third.");
    typewriter("Use rider surnames as the results site prints them (e.g. Pogacar, not Tadej).");
    println!();

    let mut players: Vec<PlayerConfig> = Vec::new();
    loop {
        let name = loop {
            let n = prompt("Player name: ")?;
            if n.is_empty() {
                println!("  Player name is required.");
            } else if players.iter().any(|p| p.name == n) {
                println!("  '{}' is already in the pool.", n);
            } else {
                break n;
            }
        };

        let picks = loop {
            let input = prompt("  Picks, winner first (comma-separated): ")?;
            match parse_picks(&input) {
                Ok(p) => break p,
                Err(e) => println!("  Invalid: {}. Try again.", e),
            }
        };

        players.push(PlayerConfig { name, picks });

        let add_another = prompt_yes_no("Add another player?", players.len() < 2)?;
        if !add_another {
            break;
        }
        println!();
    }

    // 4. Config path
    let default_config_path = default_path.unwrap_or_else(get_config_path);
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    // Check if file already exists
    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    // 5. Write config
    let config = Config {
        tier,
        race: RaceConfig {
            name: race_name,
            year: race_year,
        },
        players,
        results: None,
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    // Create parent directories
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!();
    println!("Config written to {}", config_path.display());
    typewriter("Late entries can be added by hand; the players list in the file is ordinary YAML.");
    println!("Run `velopool` after the race to see the standings.");

    Ok(())
}
