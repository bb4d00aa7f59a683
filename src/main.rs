use gomoku::{
    guest_handshake, host_handshake, init_logging,
    ui::{prompt_accept, TermFrontend},
    GameSession, GameState, Role, TcpTransport,
};

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Host a game: listen for one guest, then play.
    Host {
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
        /// Let the guest make the first move instead of the host.
        #[arg(long)]
        guest_first: bool,
    },
    /// Join a game hosted by a peer.
    Join {
        #[arg(long, default_value = "127.0.0.1:8080")]
        connect: String,
        /// Accept the host's connection request without prompting.
        #[arg(long)]
        auto_accept: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Host { bind, guest_first } => {
            let listener = TcpListener::bind(&bind).await?;
            println!("Listening on {}, waiting for a guest to connect...", bind);
            let (stream, addr) = listener.accept().await?;
            log::info!("Guest connected from {}", addr);

            let host_moves_first = !guest_first;
            let mut transport = TcpTransport::new(stream);
            host_handshake(&mut transport, host_moves_first).await?;

            let game = GameState::new(host_moves_first);
            println!(
                "Connected. You are {}.",
                game.player_with_role(Role::Host).mark
            );
            let mut session = GameSession::new(
                game,
                Role::Host,
                Box::new(transport),
                Box::new(TermFrontend::new()),
            );
            session.run().await?;
        }
        Commands::Join {
            connect,
            auto_accept,
        } => {
            println!("Connecting to {}...", connect);
            let mut transport = TcpTransport::connect(&connect).await?;
            log::info!("Connected to host at {}", connect);

            let mut accept = move || auto_accept || prompt_accept();
            let Some(host_moves_first) = guest_handshake(&mut transport, &mut accept).await?
            else {
                println!("Connection declined.");
                return Ok(());
            };

            let game = GameState::new(host_moves_first);
            println!(
                "Connected. You are {}.",
                game.player_with_role(Role::Guest).mark
            );
            let mut session = GameSession::new(
                game,
                Role::Guest,
                Box::new(transport),
                Box::new(TermFrontend::new()),
            );
            session.run().await?;
        }
    }
    Ok(())
}
