use clap::Parser;
use payroll_desk::app::console::WELCOME_BANNER;
use payroll_desk::core::ConfigProvider;
use payroll_desk::utils::logger;
use payroll_desk::{CliConfig, Console, EmployeeRegistry, PayrollError, SessionEnd};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting payroll-desk");
    tracing::debug!("CLI config: {:?}", cli);

    // 載入並驗證配置
    let config = match cli.load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let registry = EmployeeRegistry::from_config(&config);
    println!("{}", WELCOME_BANNER);

    let stdin = io::stdin();
    let mut console = Console::new(registry, stdin.lock(), io::stdout())
        .with_max_login_attempts(config.max_login_attempts());

    match console.run() {
        Ok(SessionEnd::Exited) => tracing::info!("Session finished"),
        Ok(SessionEnd::LockedOut) => tracing::warn!("Session terminated after failed logins"),
        Err(PayrollError::InputClosed) => tracing::info!("Input closed, leaving"),
        Err(e) => {
            tracing::error!("❌ Console failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            return Err(e.into());
        }
    }

    Ok(())
}
