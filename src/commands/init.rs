//! # Suite Initialization Module / 套件初始化模块
//!
//! This module creates a new `PlaybookSuite.toml` configuration through an
//! interactive command-line wizard, or writes a commented default template in
//! non-interactive mode. The generated file carries the repository identity
//! and the case catalog; the secret token itself is never written, only the
//! name of the environment variable holding it.
//!
//! 此模块通过交互式命令行向导创建新的 `PlaybookSuite.toml` 配置，
//! 或在非交互模式下写入默认模板。生成的文件包含仓库标识和用例目录；
//! 机密 token 本身从不写入，只写入持有它的环境变量的名称。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::fs;
use std::path::Path;

use crate::core::classifier::CaseCatalog;
use crate::core::config::SuiteConfig;
use crate::infra::t;

/// Runs the wizard to generate a `PlaybookSuite.toml` file.
///
/// 运行向导以生成 `PlaybookSuite.toml` 文件。
pub fn run_init_wizard(language: &str, non_interactive: bool) -> Result<()> {
    let config_path = Path::new("PlaybookSuite.toml");
    let theme = ColorfulTheme::default();

    if !non_interactive {
        println!(
            "\n{}",
            t!("init.wizard_welcome", locale = language).cyan().bold()
        );
        println!("{}", t!("init.wizard_description", locale = language));
    }

    if config_path.exists() && !non_interactive {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(
                t!(
                    "init.overwrite_prompt",
                    locale = language,
                    path = config_path.display()
                )
                .to_string(),
            )
            .default(false)
            .interact()
            .context(t!("init.user_input_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init.aborted", locale = language));
            return Ok(());
        }
    }

    if non_interactive {
        let suite = default_suite(language);
        write_config(config_path, &suite, language)?;
        return Ok(());
    }

    // Interactive part starts here
    let repository: String = Input::with_theme(&theme)
        .with_prompt(t!("init.repository_prompt", locale = language).to_string())
        .interact_text()
        .context(t!("init.user_input_failed", locale = language).to_string())?;

    let runner: String = Input::with_theme(&theme)
        .with_prompt(t!("init.runner_prompt", locale = language).to_string())
        .default("ansible-playbook".to_string())
        .interact_text()
        .context(t!("init.user_input_failed", locale = language).to_string())?;

    let token_env: String = Input::with_theme(&theme)
        .with_prompt(t!("init.token_env_prompt", locale = language).to_string())
        .default("VAULT_TOKEN".to_string())
        .interact_text()
        .context(t!("init.user_input_failed", locale = language).to_string())?;

    let tester: String = Input::with_theme(&theme)
        .with_prompt(t!("init.tester_prompt", locale = language).to_string())
        .default("unknown".to_string())
        .interact_text()
        .context(t!("init.user_input_failed", locale = language).to_string())?;

    let with_timeout = Confirm::with_theme(&theme)
        .with_prompt(t!("init.timeout_prompt", locale = language).to_string())
        .default(false)
        .interact()
        .context(t!("init.user_input_failed", locale = language).to_string())?;
    let timeout_secs = if with_timeout {
        let secs: u64 = Input::with_theme(&theme)
            .with_prompt(t!("init.timeout_secs_prompt", locale = language).to_string())
            .default(300)
            .interact_text()
            .context(t!("init.user_input_failed", locale = language).to_string())?;
        Some(secs)
    } else {
        None
    };

    let suite = SuiteConfig {
        language: language.to_string(),
        repository,
        clone_dir: None,
        runner,
        token_env,
        timeout_secs,
        tester,
        cases: CaseCatalog::default_entries(),
    };

    write_config(config_path, &suite, language)
}

fn default_suite(language: &str) -> SuiteConfig {
    SuiteConfig {
        language: language.to_string(),
        repository: "owner/repository".to_string(),
        clone_dir: None,
        runner: "ansible-playbook".to_string(),
        token_env: "VAULT_TOKEN".to_string(),
        timeout_secs: None,
        tester: "unknown".to_string(),
        cases: CaseCatalog::default_entries(),
    }
}

fn write_config(path: &Path, suite: &SuiteConfig, language: &str) -> Result<()> {
    let content = toml::to_string_pretty(suite)
        .context(t!("init.serialize_failed", locale = language).to_string())?;
    fs::write(path, content).with_context(|| {
        t!("init.write_failed", locale = language, path = path.display()).to_string()
    })?;

    println!(
        "{}",
        t!("init.config_written", locale = language, path = path.display()).green()
    );
    println!("{}", t!("init.next_steps", locale = language));
    Ok(())
}
