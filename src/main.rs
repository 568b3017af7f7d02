use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use wine_catalog::{cli, config, error, render, server, site};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use render::AskamaRenderer;
use server::StaticServer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    let config = Config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            println!("🍷 wine-catalog\n");

            println!("[1/2] Сборка страницы из {}...", config.catalog_path.display());
            let report = build(&config)?;
            println!("✔ {}\n", report.output_path.display());

            println!("[2/2] Запуск сервера...");
            let server = StaticServer::bind(&config.bind_addr, config.serve_root.clone()).await?;
            println!("✔ http://{}/ (Ctrl+C для остановки)", server.local_addr()?);
            server.serve_forever().await?;
        }

        Commands::Render => {
            println!("🍷 wine-catalog - сборка страницы\n");
            build(&config)?;
            println!("\n✅ Готово");
        }

        Commands::Serve { bind, root } => {
            let addr = bind.unwrap_or_else(|| config.bind_addr.clone());
            let root = root.unwrap_or_else(|| config.serve_root.clone());

            let server = StaticServer::bind(&addr, root).await?;
            println!("🍷 http://{}/ -> {}", server.local_addr()?, server.root().display());
            server.serve_forever().await?;
        }

        Commands::Inspect { output } => {
            let catalog = site::load_catalog(&config)?;
            let json = serde_json::to_string_pretty(&catalog)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("✔ Каталог сохранён: {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Config { show, init } => {
            if init {
                let path = PathBuf::from(config::LOCAL_CONFIG_FILE);
                if path.exists() {
                    println!("Файл уже существует: {}", path.display());
                } else {
                    Config::default().save(&path)?;
                    println!("✔ Настройки записаны: {}", path.display());
                }
            }

            if show || !init {
                println!("Настройки:");
                println!("  Таблица: {}", config.catalog_path.display());
                println!("  Лист: {}", config.sheet.as_deref().unwrap_or("(первый)"));
                println!("  Страница: {}", config.output_path.display());
                println!("  Адрес: {}", config.bind_addr);
                println!("  Корень: {}", config.serve_root.display());
                println!("  Год основания: {}", config.founded_year);
                println!(
                    "  Колонки: {}, {}, {}, {}, {}",
                    config.columns.category,
                    config.columns.name,
                    config.columns.variety,
                    config.columns.price,
                    config.columns.image,
                );
            }
        }
    }

    Ok(())
}

fn build(config: &Config) -> Result<site::BuildReport> {
    let today = chrono::Local::now().date_naive();
    let report = site::build_site(config, &AskamaRenderer, today)?;

    println!("- {}", report.years_text);
    for category in &report.categories {
        println!("- {}", if category.is_empty() { "(без категории)" } else { category.as_str() });
    }
    println!(
        "✔ Позиций: {}, выгодных: {}",
        report.wine_count, report.best_count
    );

    Ok(report)
}
