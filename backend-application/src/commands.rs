pub mod copy_commands;
