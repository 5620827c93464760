mod commands;
mod terminal;

use commands::{CommandLine, Commands, connections, system};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init(commands.verbose, cfg.quiet);

    match commands.command {
        Commands::Connections { json, watch } => {
            print::header("thera connections", cfg.quiet.max(u8::from(json)));
            connections::connections(&cfg, json, watch).await
        }
        Commands::System { id } => {
            print::header("solar system", cfg.quiet);
            system::system(&cfg, id).await
        }
    }
}
