//! CLI route: single route table and run context. Dispatches to command services and presentation.

use crate::cli::command_name;
use crate::cli::parse::{
    Commands, ConfigCommands, LicenseCommands, PipelineCommands, TerminalCommands, TestCommands,
};
use crate::cli::presentation::{
    format_config_json, format_config_text, format_license_list_text, format_license_text,
    format_login_text, format_logout_text, format_pipeline_deleted_text,
    format_pipeline_list_text, format_pipeline_text, format_signup_text,
    format_terminal_list_text, format_terminal_text, format_user_text, to_json,
};
use crate::client::ApiClient;
use crate::commands::{
    DiagnosticsCommandService, LicenseCommandService, Page, PipelineCommandService,
    TerminalCommandService, UserCommandService,
};
use crate::config::{validate_base_url, ConfigStore};
use crate::error::ClientError;
use crate::model::{
    FilterCreate, LicenseCreate, LoginRequest, PipelineCreate, TerminalCreate, UserCreate,
};
use serde::Serialize;
use serde_json::json;
use std::io::IsTerminal;
use std::path::PathBuf;
use tokio::runtime::Runtime;
use tracing::debug;

/// Runtime context for one CLI invocation: the config handle, the HTTP client
/// built from it, and the runtime driving the single request.
pub struct RunContext {
    store: ConfigStore,
    client: ApiClient,
    runtime: Runtime,
    json: bool,
    color: bool,
}

impl RunContext {
    /// Load the config (explicit path or the per-user default) and build the context.
    pub fn new(
        config_path: Option<PathBuf>,
        base_url: Option<&str>,
        format: &str,
    ) -> Result<Self, ClientError> {
        let store = match config_path {
            Some(path) => ConfigStore::load(path)?,
            None => ConfigStore::load_default()?,
        };
        Self::with_store(store, base_url, format)
    }

    /// Build the context around an already loaded store.
    ///
    /// `base_url` overrides the stored URL for this invocation without touching the file.
    pub fn with_store(
        store: ConfigStore,
        base_url: Option<&str>,
        format: &str,
    ) -> Result<Self, ClientError> {
        let mut effective = store.get().clone();
        if let Some(url) = base_url {
            effective.base_url = validate_base_url(url)?;
        }
        let client = ApiClient::new(&effective)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to start async runtime: {}", e)))?;

        let json = format == "json";
        let color =
            !json && std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        debug!(base_url = client.base_url(), "Run context ready");

        Ok(Self {
            store,
            client,
            runtime,
            json,
            color,
        })
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&mut self, command: &Commands) -> Result<String, ClientError> {
        let span = tracing::info_span!("command", name = %command_name(command));
        let _entered = span.enter();
        self.execute_inner(command)
    }

    fn execute_inner(&mut self, command: &Commands) -> Result<String, ClientError> {
        match command {
            Commands::Signup {
                username,
                notification_token,
                service_username,
                license,
                password,
                service_password,
            } => {
                let password = resolve_password(password.as_deref(), "Password")?;
                let service_password =
                    resolve_password(service_password.as_deref(), "Ticket vendor password")?;
                let user = UserCreate::new(
                    username.as_str(),
                    password,
                    notification_token.as_str(),
                    service_username.as_str(),
                    service_password,
                    license.as_str(),
                )?;
                let created = self
                    .runtime
                    .block_on(UserCommandService::signup(&self.client, &user))?;
                self.render(&created, format_signup_text)
            }
            Commands::Login { username, password } => {
                let password = resolve_password(password.as_deref(), "Password")?;
                let credentials = LoginRequest::new(username.as_str(), password)?;
                let token = self.runtime.block_on(UserCommandService::login(
                    &self.client,
                    &mut self.store,
                    &credentials,
                ))?;
                let config_path = self.store.path();
                if self.json {
                    to_json(&json!({
                        "username": username,
                        "token_type": token.token_type,
                        "config_path": config_path.display().to_string(),
                    }))
                } else {
                    Ok(format_login_text(username, &token, config_path))
                }
            }
            Commands::Logout => {
                UserCommandService::logout(&mut self.store)?;
                let config_path = self.store.path();
                if self.json {
                    to_json(&json!({
                        "logged_out": true,
                        "config_path": config_path.display().to_string(),
                    }))
                } else {
                    Ok(format_logout_text(config_path))
                }
            }
            Commands::Me => {
                let user = self.runtime.block_on(UserCommandService::me(&self.client))?;
                let color = self.color;
                self.render(&user, |u| format_user_text(u, color))
            }
            Commands::License { command } => self.handle_license_command(command),
            Commands::Terminals { command } => self.handle_terminal_command(command),
            Commands::Pipelines { command } => self.handle_pipeline_command(command),
            Commands::Test { command } => self.handle_test_command(command),
            Commands::Config { command } => self.handle_config_command(command),
        }
    }

    fn handle_license_command(&self, command: &LicenseCommands) -> Result<String, ClientError> {
        match command {
            LicenseCommands::Create { value } => {
                let license = LicenseCreate::new(value.as_str())?;
                let created = self
                    .runtime
                    .block_on(LicenseCommandService::create(&self.client, &license))?;
                let color = self.color;
                self.render(&created, |l| format_license_text(l, color))
            }
            LicenseCommands::List { skip, limit } => {
                let page = Page {
                    skip: *skip,
                    limit: *limit,
                };
                let licenses = self
                    .runtime
                    .block_on(LicenseCommandService::list(&self.client, page))?;
                self.render(&licenses, |l| format_license_list_text(l))
            }
        }
    }

    fn handle_terminal_command(&self, command: &TerminalCommands) -> Result<String, ClientError> {
        match command {
            TerminalCommands::List { skip, limit } => {
                let page = Page {
                    skip: *skip,
                    limit: *limit,
                };
                let terminals = self
                    .runtime
                    .block_on(TerminalCommandService::list(&self.client, page))?;
                self.render(&terminals, |t| format_terminal_list_text(t))
            }
            TerminalCommands::Create { id, name } => {
                let terminal = TerminalCreate::new(*id, name.as_str())?;
                let created = self
                    .runtime
                    .block_on(TerminalCommandService::create(&self.client, &terminal))?;
                self.render(&created, format_terminal_text)
            }
        }
    }

    fn handle_pipeline_command(&self, command: &PipelineCommands) -> Result<String, ClientError> {
        let color = self.color;
        match command {
            PipelineCommands::Delete { id } => {
                let deleted = self
                    .runtime
                    .block_on(PipelineCommandService::delete(&self.client, *id))?;
                self.render(&deleted, format_pipeline_deleted_text)
            }
            PipelineCommands::View { id } => {
                let pipeline = self
                    .runtime
                    .block_on(PipelineCommandService::view(&self.client, *id))?;
                self.render(&pipeline, |p| format_pipeline_text(p, color))
            }
            PipelineCommands::List => {
                let pipelines = self
                    .runtime
                    .block_on(PipelineCommandService::list(&self.client))?;
                self.render(&pipelines, |p| format_pipeline_list_text(p))
            }
            PipelineCommands::Create {
                desc,
                date,
                origin_terminal,
                dest_terminal,
                start_time,
                end_time,
            } => {
                let search_filter = FilterCreate::from_time_bounds(start_time, end_time)?;
                let pipeline = PipelineCreate::new(
                    desc.as_str(),
                    date,
                    origin_terminal.as_str(),
                    dest_terminal.as_str(),
                )?
                .with_search_filter(search_filter);
                let created = self
                    .runtime
                    .block_on(PipelineCommandService::create(&self.client, &pipeline))?;
                self.render(&created, |p| format_pipeline_text(p, color))
            }
        }
    }

    fn handle_test_command(&self, command: &TestCommands) -> Result<String, ClientError> {
        match command {
            TestCommands::Gotify => {
                let message = self
                    .runtime
                    .block_on(DiagnosticsCommandService::test_notification(&self.client))?;
                if self.json {
                    to_json(&json!({ "message": message }))
                } else {
                    Ok(message)
                }
            }
        }
    }

    fn handle_config_command(&mut self, command: &ConfigCommands) -> Result<String, ClientError> {
        match command {
            ConfigCommands::Show => {
                let config = self.store.get();
                if self.json {
                    format_config_json(config, self.store.path())
                } else {
                    Ok(format_config_text(config, self.store.path()))
                }
            }
            ConfigCommands::SetBaseUrl { url } => {
                self.store.set_base_url(url)?;
                self.store.persist()?;
                let base_url = &self.store.get().base_url;
                if self.json {
                    to_json(&json!({ "base_url": base_url }))
                } else {
                    Ok(format!("Base URL set to {}", base_url))
                }
            }
        }
    }

    /// JSON output serializes `value`; text output goes through `text`.
    fn render<T, F>(&self, value: &T, text: F) -> Result<String, ClientError>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T) -> String,
    {
        if self.json {
            to_json(value)
        } else {
            Ok(text(value))
        }
    }
}

/// Use the password given on the command line, or prompt for it without echo.
fn resolve_password(provided: Option<&str>, prompt: &str) -> Result<String, ClientError> {
    if let Some(password) = provided {
        return Ok(password.to_string());
    }
    dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| ClientError::Validation(format!("Failed to read password: {}", e)))
}
