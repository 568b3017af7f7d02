use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wine-catalog")]
#[command(about = "Каталог вин: страница из Excel и статический HTTP-сервер", long_about = None)]
pub struct Cli {
    /// Без подкоманды: собрать страницу и запустить сервер
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Файл настроек (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Подробный лог
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum Commands {
    /// Собрать страницу и раздавать каталог по HTTP
    Run,

    /// Только собрать страницу
    Render,

    /// Только запустить сервер
    Serve {
        /// Адрес (по умолчанию из настроек)
        #[arg(short, long)]
        bind: Option<String>,

        /// Корень раздачи (по умолчанию из настроек)
        #[arg(short, long)]
        root: Option<PathBuf>,
    },

    /// Вывести сгруппированный каталог в JSON
    Inspect {
        /// Записать в файл вместо stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Показать/создать настройки
    Config {
        /// Показать действующие настройки
        #[arg(long)]
        show: bool,

        /// Записать настройки по умолчанию в ./wine-catalog.json
        #[arg(long)]
        init: bool,
    },
}
