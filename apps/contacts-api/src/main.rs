use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = contacts_api::Args::parse();

	contacts_api::run(args).await
}
