pub mod hero;
pub mod parents;
pub mod utility;

use chorequest_core::{Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::help::META,
    utility::usage::META,
    hero::start::META,
    hero::profile::META,
    hero::tasks::META,
    hero::done::META,
    hero::calendar::META,
    hero::leaderboard::META,
    hero::achievements::META,
    hero::rewards::META,
    hero::buy::META,
    parents::unlock::META,
    parents::lock::META,
    parents::addtask::META,
    parents::removetask::META,
    parents::addreward::META,
    parents::removereward::META,
    parents::pending::META,
    parents::fulfill::META,
    parents::history::META,
];

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        utility::help::help(),
        utility::usage::usage(),
        hero::start::start(),
        hero::profile::profile(),
        hero::tasks::tasks(),
        hero::done::done(),
        hero::calendar::calendar(),
        hero::leaderboard::leaderboard(),
        hero::achievements::achievements(),
        hero::rewards::rewards(),
        hero::buy::buy(),
        parents::unlock::unlock(),
        parents::lock::lock(),
        parents::addtask::addtask(),
        parents::removetask::removetask(),
        parents::addreward::addreward(),
        parents::removereward::removereward(),
        parents::pending::pending(),
        parents::fulfill::fulfill(),
        parents::history::history(),
    ]
}

#[cfg(test)]
mod tests {
    use super::{COMMANDS, commands};

    #[test]
    fn every_command_has_metadata() {
        let registered = commands();
        assert_eq!(registered.len(), COMMANDS.len());
        for command in &registered {
            assert!(
                COMMANDS.iter().any(|meta| meta.name == command.name),
                "missing META for {}",
                command.name
            );
        }
    }

    #[test]
    fn usages_start_with_prefix_and_name() {
        for meta in COMMANDS {
            assert!(meta.usage.starts_with(&format!("!{}", meta.name)));
        }
    }
}
