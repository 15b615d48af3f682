use clap::{Arg, ArgAction, CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::process::ProcessState;
use crate::snmp::SnmpVersion;

#[derive(Parser, Debug)]
#[command(name = "check_snmp_process")]
#[command(about = "Проверяет состояние процессов на удалённом хосте через SNMP (hrSWRunTable)")]
#[command(version = env!("CARGO_PKG_VERSION"), disable_version_flag = true)]
pub struct Args {
    /// Адрес SNMP агента
    #[arg(short = 'H', long)]
    pub host: String,

    /// Таймаут опроса в секундах [по умолчанию: 30]
    #[arg(short = 't', long)]
    pub timeout: Option<u64>,

    /// SNMP community [по умолчанию: public]
    #[arg(short = 'C', long)]
    pub community: Option<String>,

    /// Версия SNMP: 1 или 2c [по умолчанию: 1]
    #[arg(short = 'V', long = "snmp-version")]
    pub snmp_version: Option<SnmpVersion>,

    /// UDP порт агента [по умолчанию: 161]
    #[arg(short = 'p', long)]
    pub port: Option<u16>,

    /// Ожидаемое состояние: running, runnable, not-runnable, invalid, unknown
    #[arg(long, default_value = "running")]
    pub state: ProcessState,

    /// Разбивать каждый аргумент по запятым
    #[arg(long)]
    pub comma_separated: bool,

    /// Вывести все процессы с их состоянием и выйти
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Вывод одной строкой JSON
    #[arg(long)]
    pub json: bool,

    /// YAML файл с настройками подключения
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Подробнее логировать в stderr (-v, -vv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Имена процессов
    #[arg(value_name = "PROCESS")]
    pub processes: Vec<String>,
}

impl Args {
    /// `-V` занят под версию SNMP, поэтому версия программы только через `--version`
    pub fn command_with_version() -> clap::Command {
        Self::command().arg(
            Arg::new("version")
                .long("version")
                .action(ArgAction::Version)
                .help("Print version"),
        )
    }

    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut matches = Self::command_with_version().try_get_matches_from(args)?;
        Self::from_arg_matches_mut(&mut matches)
    }
}
