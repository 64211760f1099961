use stockindex_demo::Output;

fn main() -> anyhow::Result<()> {
    stockindex_observability::init();

    let format = if std::env::args().skip(1).any(|a| a == "--json") {
        Output::Json
    } else {
        Output::Text
    };

    let stdout = std::io::stdout();
    stockindex_demo::run(stdout.lock(), format)?;
    Ok(())
}
