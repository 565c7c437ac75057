use clap::Parser;
use tokio::net::TcpListener;

use reversi::{init_logging, run_session, TcpTransport, DEFAULT_COLS, DEFAULT_ROWS};

/// Referee server: pairs up connecting clients and plays one game per pair.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = "0.0.0.0:5555")]
    bind: String,
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    // fail before accepting anyone if the board size is unusable
    reversi::Board::new(cli.rows, cli.cols).map_err(|e| anyhow::anyhow!(e))?;

    let listener = TcpListener::bind(&cli.bind).await?;
    log::info!("[Server] listening on {}", cli.bind);
    loop {
        let (first, addr1) = listener.accept().await?;
        log::info!("[Server] player one connected from {}", addr1);
        let (second, addr2) = listener.accept().await?;
        log::info!("[Server] player two connected from {}", addr2);

        let (rows, cols) = (cli.rows, cli.cols);
        tokio::spawn(async move {
            let one = TcpTransport::new(first);
            let two = TcpTransport::new(second);
            match run_session(one, two, rows, cols).await {
                Ok(summary) => log::info!("[Server] {} vs {} finished: {:?}", addr1, addr2, summary),
                Err(e) => log::warn!("[Server] {} vs {} ended with an error: {}", addr1, addr2, e),
            }
        });
    }
}
