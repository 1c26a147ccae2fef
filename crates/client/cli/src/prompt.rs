//! Blocking stdin prompts with local re-prompt loops.
//!
//! Parse failures never leave this module; every prompt loops until the
//! player supplies something usable. EOF on stdin ends the program.

use std::io::{self, Write};

use arena_core::ClassKind;
use strum::IntoEnumIterator;

use crate::frontend::DIVIDER;

/// Prints `prompt`, reads one line, returns it trimmed.
pub fn read_trimmed(prompt: &str) -> String {
    print!("{prompt}");
    io::stdout().flush().ok();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => {
            println!();
            println!("Goodbye.");
            std::process::exit(0);
        }
        Ok(_) => line.trim().to_string(),
        Err(err) => {
            eprintln!("failed to read input: {err}");
            std::process::exit(1);
        }
    }
}

/// Asks for the number of participants, at least two.
pub fn player_count() -> usize {
    loop {
        let line = read_trimmed("Enter the number of players (at least 2): ");
        match line.parse::<usize>() {
            Ok(count) if count >= 2 => return count,
            Ok(_) => println!("Please enter a number greater than or equal to 2."),
            Err(_) => println!("Invalid input. Please enter a valid number."),
        }
    }
}

/// Asks one player for their name and class.
pub fn combatant_setup() -> (String, ClassKind) {
    let name = loop {
        let name = read_trimmed("Enter your character name: ");
        if !name.is_empty() {
            break name;
        }
        println!("A name cannot be empty.");
    };

    let classes: Vec<ClassKind> = ClassKind::iter().collect();
    println!("{name}, choose your character class:");
    for (idx, class) in classes.iter().enumerate() {
        println!("{}. {class}", idx + 1);
    }

    let class = loop {
        let line = read_trimmed("Who would you be in the Battle Arena: ");
        match line.parse::<usize>() {
            Ok(choice) if (1..=classes.len()).contains(&choice) => break classes[choice - 1],
            Ok(_) => println!("Invalid choice. Please try again."),
            Err(_) => println!("Invalid input. Please enter a valid number."),
        }
    };

    println!("{}", class_intro(&name, class));
    println!("{DIVIDER}");

    (name, class)
}

/// Flavor line greeting a freshly created character.
fn class_intro(name: &str, class: ClassKind) -> String {
    match class {
        ClassKind::Druid => format!("Spirit of Elune guide {name}'s path"),
        ClassKind::Warrior => {
            format!("Mighty {name} entered the killing field. Lok'tar Ogar!!!!!!!")
        }
        ClassKind::Mage => {
            format!("The currents of magic are in upheaval. I, {name}, shall bend them to my will")
        }
    }
}
