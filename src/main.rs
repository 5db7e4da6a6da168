use clap::Parser;
use ems_demo::app::menu::{run_menu, MenuEntry};
use ems_demo::domain::model::CampaignType;
use ems_demo::utils::error::{EmsError, ErrorSeverity};
use ems_demo::utils::{logger, validation::Validate};
use ems_demo::{
    CampaignStatisticsDemo, CliConfig, Command, Console, Demo, DemoContext, EmsConfig,
    EmsServiceAgent, ListCampaignsDemo, LocalStorage, SendCampaignDemo, TriggerMailDemo,
};
use tokio::io::BufReader;

// 根據錯誤嚴重程度決定退出碼
fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 0,      // 警告，但成功
        ErrorSeverity::Medium => 2,   // 可重試
        ErrorSeverity::High => 1,     // 處理錯誤
        ErrorSeverity::Critical => 3, // 系統錯誤
    }
}

fn report_failure(context: &str, e: &EmsError) {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        context,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting ems-demo");

    let mut config = match EmsConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            report_failure("Loading configuration failed", &e);
            std::process::exit(1);
        }
    };
    cli.apply_to(&mut config);

    // 驗證配置
    if let Err(e) = config.validate() {
        report_failure("Configuration validation failed", &e);
        std::process::exit(1);
    }
    tracing::debug!("Configuration: {:?}", config);

    let agent = EmsServiceAgent::from_config(&config)?;
    let storage = LocalStorage::new(config.media.assets_path.clone());
    let ctx = DemoContext::new(agent, storage, Console::stdout(), config);

    let result = match cli.command.clone().unwrap_or(Command::Menu) {
        Command::Menu => {
            let entries = vec![
                MenuEntry::new("a", Box::new(SendCampaignDemo::new(ctx.clone()))),
                MenuEntry::new("b", Box::new(CampaignStatisticsDemo::new(ctx.clone()))),
                MenuEntry::new("c", Box::new(TriggerMailDemo::new(ctx.clone()))),
                MenuEntry::new(
                    "d",
                    Box::new(ListCampaignsDemo::new(ctx.clone(), CampaignType::InWork, false)),
                ),
            ];
            run_menu(BufReader::new(tokio::io::stdin()), &ctx.console, &entries).await
        }
        Command::SendCampaign => SendCampaignDemo::new(ctx.clone()).run().await,
        Command::Statistics { .. } => CampaignStatisticsDemo::new(ctx.clone()).run().await,
        Command::TriggerMail { .. } => TriggerMailDemo::new(ctx.clone()).run().await,
        Command::Campaigns {
            campaign_type,
            json,
        } => {
            ListCampaignsDemo::new(ctx.clone(), campaign_type.into(), json)
                .run()
                .await
        }
    };

    if let Err(e) = result {
        report_failure("Demo failed", &e);
        let code = exit_code(e.severity());
        if code > 0 {
            std::process::exit(code);
        }
    }

    Ok(())
}
