// commands.rs

use crate::app::App;
use crate::error::{Error, Result};
use crate::io;
use crate::objective::Objective;
use std::path::Path;
use tracing::debug;

/// The closed set of commands the loop can dispatch. Name lookup goes
/// through the fixed table below, behavior through one exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    AddObj,
    SaveData,
    DelObj,
    ListObj,
    History,
}

pub const COMMANDS: [(&str, Command); 6] = [
    ("help", Command::Help),
    ("add_obj", Command::AddObj),
    ("save_data", Command::SaveData),
    ("del_obj", Command::DelObj),
    ("list_obj", Command::ListObj),
    ("history", Command::History),
];

// The help tables also document load_data, which has no registered command;
// asking for it works, running it is an unknown command.
const HELP_BRIEF: [(&str, &str); 7] = [
    ("help", "help [command_name]\n"),
    ("add_obj", "add_obj [objective_data]\n"),
    ("save_data", "save_data [path]\n"),
    ("load_data", "load_data path\n"),
    ("del_obj", "del_obj option\n"),
    ("list_obj", "list_obj\n"),
    ("history", "history"),
];

const HELP_FULL: [(&str, &str); 7] = [
    (
        "help",
        "help [command_name]\n\
         Display information about built-in commands.\n\
         \n\
         If COMMAND_NAME specified, gives detailed information about command.\n",
    ),
    (
        "add_obj",
        "add_obj [objective_data]\n\
         add_obj [deadline_date deadline_time obj_theme obj_task]\n\
         Creates new objective in the TODO list.\n\
         \n\
         If OBJECTIVE_DATA specified, instantly creates new objective.\n\
         Otherwise, you could type info one by one.\n",
    ),
    (
        "save_data",
        "save_data [path]\n\
         Saves objectives to file.\n\
         \n\
         If PATH specified, save data into it (rewrites file!).\n\
         \n\
         PATH could be file or directory path.\n\
         If PATH is a directory, there will be created new file named 'todo_list.json'.\n\
         \n\
         If PATH didn't specified, creates directory and file in the app directory.",
    ),
    (
        "load_data",
        "load_data path\n\
         Loads objectives from file PATH.\n",
    ),
    (
        "del_obj",
        "del_obj option\n\
         Deletes certain loaded objective/es (without ability to restore it!).\n\
         \n\
         Options:\n\
         \n\
         -a\n\
         \t fully clear objective list.\n\
         \n\
         -i = INDEX\n\
         \n\
         \t delete objective by its index in objective list.\n\
         \n\
         -t = THEME\t delete objectives by their theme.\n",
    ),
    (
        "list_obj",
        "list_obj\n\
         Prints list of all loaded objectives.\n",
    ),
    (
        "history",
        "history\n\
         Prints list of 20 previously used commands with arguments.\n",
    ),
];

impl Command {
    pub fn lookup(name: &str) -> Result<Self> {
        COMMANDS
            .iter()
            .find(|(cmd_name, _)| *cmd_name == name)
            .map(|(_, cmd)| *cmd)
            .ok_or_else(|| Error::UnknownCommand(name.to_string()))
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::AddObj => "add_obj",
            Command::SaveData => "save_data",
            Command::DelObj => "del_obj",
            Command::ListObj => "list_obj",
            Command::History => "history",
        }
    }

    pub fn execute(&self, app: &mut App, args: &[&str]) -> Result<String> {
        debug!(command = self.name(), args = args.len(), "executing command");
        match self {
            Command::Help => help(args),
            Command::AddObj => add_obj(app, args),
            Command::SaveData => save_data(app, args),
            Command::DelObj => Err(Error::NotImplemented("del_obj")),
            Command::ListObj => list_obj(app, args),
            Command::History => Err(Error::NotImplemented("history")),
        }
    }
}

fn help(args: &[&str]) -> Result<String> {
    match args {
        &[] => {
            let cmds_info: String = HELP_BRIEF.iter().map(|(_, brief)| *brief).collect();
            Ok(format!(
                "ToDo App, version 1.0 - release.\n\
                 These commands are available. Type 'help' to see this list.\n\
                 Type 'help name' to find what command 'name' do.\n\n{cmds_info}\n"
            ))
        }
        &[topic] => HELP_FULL
            .iter()
            .find(|(name, _)| *name == topic)
            .map(|(_, text)| text.to_string())
            .ok_or_else(|| Error::UnknownCommand(topic.to_string())),
        _ => Err(Error::InvalidArgumentsNum {
            command: "help",
            expected: "needed no more than one argument.",
        }),
    }
}

fn add_obj(app: &mut App, args: &[&str]) -> Result<String> {
    let objective = match args {
        &[] => prompt_new_objective()?,
        &[deadline_date, deadline_time, theme, task] => Objective::new(
            None,
            Some(deadline_date),
            Some(deadline_time),
            Some(theme),
            Some(task),
        )?,
        _ => {
            return Err(Error::InvalidArgumentsNum {
                command: "add_obj",
                expected: "needed four arguments for instant creation of objective.",
            });
        }
    };
    app.add_objective(objective);
    Ok("Created new objective successfully.".to_string())
}

fn prompt_new_objective() -> Result<Objective> {
    println!("Creating new objective.");
    let theme = ask("Type theme of the objective:")?;
    let deadline_date = ask(
        "Type deadline date (dd-mm-yyyy) of the objective\
         (if not specified, deadline date will be set tomorrow):",
    )?;
    let deadline_time = ask(
        "Type deadline time (hh:mm) of the objective\
         (if not specified, deadline time will be 00:00):",
    )?;
    let task = ask("Type task of the objective:")?;
    Objective::new(
        None,
        Some(deadline_date.as_str()),
        Some(deadline_time.as_str()),
        Some(theme.as_str()),
        Some(task.as_str()),
    )
}

fn ask(message: &str) -> Result<String> {
    io::prompt(message)?.ok_or(Error::Eof)
}

fn save_data(app: &mut App, args: &[&str]) -> Result<String> {
    if args.len() > 1 {
        return Err(Error::InvalidArgumentsNum {
            command: "save_data",
            expected: "needed no more than one argument",
        });
    }
    app.save(args.first().map(|path| Path::new(*path)))?;
    Ok("Saved successfully.".to_string())
}

fn list_obj(app: &mut App, args: &[&str]) -> Result<String> {
    if !args.is_empty() {
        return Err(Error::InvalidArgumentsNum {
            command: "list_obj",
            expected: "didn't need any arguments",
        });
    }
    Ok(app.render_all())
}
