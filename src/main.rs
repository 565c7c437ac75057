use clap::Parser;

use reversi::{
    init_quiet_logging, ui, ui::ClientUi, BoardSnapshot, NetworkClient, Player, TcpTransport,
    PLAYER_ONE_GLYPH, PLAYER_TWO_GLYPH,
};

/// Terminal client for networked Reversi.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host name or address of the game server.
    #[arg(long)]
    host: String,
    /// Port the game server listens on.
    #[arg(long)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_quiet_logging();

    println!("Connecting to {}:{}...", cli.host, cli.port);
    let transport = TcpTransport::connect((cli.host.as_str(), cli.port)).await?;
    let (client, model, moves) = NetworkClient::connect(Box::new(transport)).await?;
    model.initialize_game();

    let title = {
        let state = model.read();
        format!(
            " Reversi {}x{}, you play {} ",
            state.rows(),
            state.cols(),
            match state.me() {
                Player::One => PLAYER_ONE_GLYPH,
                Player::Two => PLAYER_TWO_GLYPH,
            }
        )
    };

    let ui_model = model.clone();
    let front_end = tokio::task::spawn_blocking(move || {
        let mut client_ui = ClientUi::new(ui_model, moves);
        ui::terminal::run(&mut client_ui, &title)
    });
    let session = tokio::spawn(client.run());

    front_end.await??;

    if session.is_finished() {
        match session.await? {
            Ok(status) => println!("Game over: {:?}", status),
            Err(e) => eprintln!("Game ended with an error: {}", e),
        }
    } else {
        println!("Left the game.");
    }
    Ok(())
}
