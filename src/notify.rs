// src/notify.rs
//! User-facing dialogs. The workflow decides *what* to say; frontends decide
//! how to show it (native modal box, stderr, or a test recorder).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dialog {
    /// Shown before any work starts.
    Wait,
    /// Page loaded but a field could not be read; simulated values follow.
    Simulated { city: String },
    /// Row written.
    Saved { temperature: String, humidity: String },
    /// Browser or page failure; simulated values were written instead.
    Failed { error: String, temperature: String, humidity: String },
    /// The spreadsheet itself could not be written.
    SaveFailed { error: String },
}

impl Dialog {
    pub fn level(&self) -> Level {
        match self {
            Dialog::Wait | Dialog::Saved { .. } => Level::Info,
            Dialog::Simulated { .. } | Dialog::Failed { .. } | Dialog::SaveFailed { .. } => Level::Warning,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dialog::Wait => "Buscando previsão no Climatempo...",
            Dialog::Saved { .. } => "Sucesso",
            Dialog::Simulated { .. } | Dialog::Failed { .. } => "Aviso",
            Dialog::SaveFailed { .. } => "Erro",
        }
    }

    pub fn body(&self) -> String {
        match self {
            Dialog::Wait => s!("Espera"),
            Dialog::Simulated { city } => format!(
                "Não foi possível obter dados reais do Climatempo. \
                 Usando dados simulados baseados no clima típico de {city}."
            ),
            Dialog::Saved { temperature, humidity } => format!(
                "Dados salvos com sucesso!\nTemperatura: {temperature}°C\nUmidade: {humidity}%"
            ),
            Dialog::Failed { error, temperature, humidity } => format!(
                "Erro ao acessar o Climatempo: {error}\nUsando dados simulados.\n\
                 Temperatura: {temperature}°C\nUmidade: {humidity}%"
            ),
            Dialog::SaveFailed { error } => {
                format!("Não foi possível salvar a planilha: {error}")
            }
        }
    }
}

pub trait Notifier {
    /// Blocks until the user dismisses the dialog (for modal frontends).
    fn show(&self, dialog: &Dialog);
}

/// Writes dialogs to stderr; used headless.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn show(&self, dialog: &Dialog) {
        let tag = match dialog.level() {
            Level::Info => "info",
            Level::Warning => "warning",
        };
        eprintln!("[{tag}] {}: {}", dialog.title(), dialog.body().replace('\n', " | "));
    }
}
