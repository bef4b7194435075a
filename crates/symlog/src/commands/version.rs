pub fn run() -> anyhow::Result<()> {
    println!("symlog {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
