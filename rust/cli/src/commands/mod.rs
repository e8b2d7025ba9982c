//! One module per subcommand. Each exposes a `handle_*_command` that writes
//! to the streams it is given and returns `Result<(), CliError>`.

pub mod cfg;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
