use reversi::{
    init_quiet_logging, run_bot, run_session, GreedyBot, InMemoryTransport, NetworkClient, RandomBot, DEFAULT_COLS,
    DEFAULT_ROWS,
};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;
    init_quiet_logging();

    let (client1, server1) = InMemoryTransport::pair();
    let (client2, server2) = InMemoryTransport::pair();
    let referee = tokio::spawn(run_session(server1, server2, DEFAULT_ROWS, DEFAULT_COLS));

    let (net1, model1, moves1) = NetworkClient::connect(Box::new(client1)).await?;
    let (net2, model2, moves2) = NetworkClient::connect(Box::new(client2)).await?;
    model1.initialize_game();
    model2.initialize_game();

    let bot1 = tokio::spawn(run_bot(model1, moves1, GreedyBot::new(seed1)));
    let bot2 = tokio::spawn(run_bot(model2, moves2, RandomBot::new(seed2)));

    let (r1, r2) = tokio::try_join!(net1.run(), net2.run())?;
    let summary = referee.await??;
    bot1.await?;
    bot2.await?;

    let winner = summary.winner.map(|p| match p {
        reversi::Player::One => "player1",
        reversi::Player::Two => "player2",
    });
    let result = json!({
        "player1": {"strategy": "greedy", "status": format!("{:?}", r1), "discs": summary.player_one_discs},
        "player2": {"strategy": "random", "status": format!("{:?}", r2), "discs": summary.player_two_discs},
        "moves": summary.moves_played,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
