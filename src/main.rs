use std::path::PathBuf;

use labyrinth::shell::Shell;

fn main() -> std::io::Result<()> {
    // Logs go to a rolling file so they never interleave with the maze
    // drawing on stdout.
    let file_appender = tracing_appender::rolling::daily("logs", "labyrinth.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::info!("labyrinth shell starting");
    Shell::new(PathBuf::from("maps")).run()
}
