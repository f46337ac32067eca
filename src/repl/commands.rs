//! REPL Commands
//!
//! The command table and one handler per command. Handlers write their
//! output to the supplied writer and return [`Flow`] to tell the loop
//! whether to keep going.

use std::io::Write;

use rand::Rng;

use crate::error::Result;
use crate::repl::Session;

/// What the REPL should do after a command finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Catch,
    Exit,
    Explore,
    Help,
    Inspect,
    Map,
    MapBack,
    Pokedex,
}

/// A named REPL command.
#[derive(Debug)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    action: Action,
}

/// Every command, ordered by name.
pub const COMMANDS: &[Command] = &[
    Command {
        name: "catch",
        description: "Try to catch a Pokemon: catch <pokemon>",
        action: Action::Catch,
    },
    Command {
        name: "exit",
        description: "Exit the Pokedex",
        action: Action::Exit,
    },
    Command {
        name: "explore",
        description: "List the Pokemon found in an area: explore <area>",
        action: Action::Explore,
    },
    Command {
        name: "help",
        description: "Displays a help message",
        action: Action::Help,
    },
    Command {
        name: "inspect",
        description: "Show details of a caught Pokemon: inspect <pokemon>",
        action: Action::Inspect,
    },
    Command {
        name: "map",
        description: "Display the next page of location areas",
        action: Action::Map,
    },
    Command {
        name: "mapb",
        description: "Display the previous page of location areas",
        action: Action::MapBack,
    },
    Command {
        name: "pokedex",
        description: "List all caught Pokemon",
        action: Action::Pokedex,
    },
];

/// Looks up a command by its exact name.
pub fn find(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|command| command.name == name)
}

impl Command {
    /// Runs the command with the words that followed its name.
    pub async fn run<W: Write>(
        &self,
        session: &mut Session,
        args: &[String],
        out: &mut W,
    ) -> Result<Flow> {
        match self.action {
            Action::Help => help(out),
            Action::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                Ok(Flow::Exit)
            }
            Action::Map => {
                let next = session.next.clone();
                show_page(session, next, "You're on the last page", out).await
            }
            Action::MapBack => {
                let previous = session.previous.clone();
                show_page(session, previous, "You're on the first page", out).await
            }
            Action::Explore => explore(session, args, out).await,
            Action::Catch => catch(session, args, out).await,
            Action::Inspect => inspect(session, args, out),
            Action::Pokedex => pokedex(session, out),
        }
    }
}

fn help<W: Write>(out: &mut W) -> Result<Flow> {
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for command in COMMANDS {
        writeln!(out, "{}: {}", command.name, command.description)?;
    }
    Ok(Flow::Continue)
}

/// Prints one location-area page and moves the cursor to its neighbours.
async fn show_page<W: Write>(
    session: &mut Session,
    url: Option<String>,
    at_edge: &str,
    out: &mut W,
) -> Result<Flow> {
    let Some(url) = url else {
        writeln!(out, "{}", at_edge)?;
        return Ok(Flow::Continue);
    };

    let page = session.client.location_area_page(&url).await?;
    for area in &page.results {
        writeln!(out, "{}", area.name)?;
    }

    session.next = page.next;
    session.previous = page.previous;
    Ok(Flow::Continue)
}

async fn explore<W: Write>(session: &mut Session, args: &[String], out: &mut W) -> Result<Flow> {
    let Some(area) = args.first() else {
        writeln!(out, "Usage: explore <area>")?;
        return Ok(Flow::Continue);
    };

    let details = session.client.area_details(area).await?;
    writeln!(out, "Exploring {}", details.name)?;

    if details.pokemon_encounters.is_empty() {
        writeln!(out, "No Pokemon found in this area")?;
    } else {
        writeln!(out, "Found Pokemon:")?;
        for name in details.pokemon_names() {
            writeln!(out, " - {}", name)?;
        }
    }
    Ok(Flow::Continue)
}

async fn catch<W: Write>(session: &mut Session, args: &[String], out: &mut W) -> Result<Flow> {
    let Some(name) = args.first() else {
        writeln!(out, "Usage: catch <pokemon>")?;
        return Ok(Flow::Continue);
    };

    writeln!(out, "Throwing a Pokeball at {}...", name)?;
    let pokemon = session.client.pokemon(name).await?;

    let base_experience = pokemon.base_experience.unwrap_or(0);
    writeln!(out, "Base experience: {}", base_experience)?;

    if roll_catch(&mut session.rng, base_experience) {
        writeln!(out, "{} was caught!", name)?;
        session.caught.insert(name.clone(), pokemon);
    } else {
        writeln!(out, "{} escaped!", name)?;
    }
    Ok(Flow::Continue)
}

/// Rolls against a catch chance of one in four for any positive base
/// experience. Zero never catches.
pub fn roll_catch<R: Rng + ?Sized>(rng: &mut R, base_experience: u32) -> bool {
    base_experience > 0 && rng.gen_range(0..base_experience) < base_experience / 4
}

fn inspect<W: Write>(session: &Session, args: &[String], out: &mut W) -> Result<Flow> {
    let Some(name) = args.first() else {
        writeln!(out, "Usage: inspect <pokemon>")?;
        return Ok(Flow::Continue);
    };

    let Some(pokemon) = session.caught.get(name) else {
        writeln!(out, "{} has not been caught", name)?;
        return Ok(Flow::Continue);
    };

    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, " -{}: {}", stat.stat.name, stat.base_stat)?;
    }
    writeln!(out, "Types:")?;
    for entry in &pokemon.types {
        writeln!(out, " - {}", entry.type_.name)?;
    }
    Ok(Flow::Continue)
}

fn pokedex<W: Write>(session: &Session, out: &mut W) -> Result<Flow> {
    writeln!(out, "Your Pokedex:")?;
    for name in session.caught.keys() {
        writeln!(out, " - {}", name)?;
    }
    Ok(Flow::Continue)
}
