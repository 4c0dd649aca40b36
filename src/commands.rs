use teloxide::utils::command::BotCommands;

/// Fixed command vocabulary of the Telegram channel.
///
/// The derive only feeds the command menu published by `set_webhook`; inbound
/// text goes through [`Inbound::decode`], which also understands the bare-word
/// aliases the menu can't express.
#[derive(BotCommands, Clone, Copy, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Comandos disponibles:")]
pub enum Command {
    #[command(description = "saludo y menú.")]
    Start,
    #[command(rename = "acutor", description = "manual ORION.")]
    Manual,
    #[command(rename = "pb", description = "price book.")]
    PriceBook,
    #[command(description = "Orion apps.")]
    Apps,
    #[command(rename = "otp", description = "Orion bots.")]
    Bots,
    #[command(description = "CV profesional.")]
    Cv,
    #[command(rename = "tj", description = "tarjeta digital.")]
    Card,
    #[command(description = "skills técnicas.")]
    Skills,
    #[command(description = "landing page.")]
    Landing,
    #[command(hide)]
    Status,
    #[command(hide)]
    Stats,
    #[command(rename = "ayuda", description = "ver comandos.")]
    Help,
}

impl Command {
    fn from_slash(name: &str) -> Option<Self> {
        let cmd = match name {
            "start" => Command::Start,
            "acutor" => Command::Manual,
            "pb" => Command::PriceBook,
            "apps" => Command::Apps,
            "otp" => Command::Bots,
            "cv" => Command::Cv,
            "tj" => Command::Card,
            "skills" => Command::Skills,
            "landing" => Command::Landing,
            "status" => Command::Status,
            "stats" => Command::Stats,
            "ayuda" => Command::Help,
            _ => return None,
        };
        Some(cmd)
    }

    fn from_alias(text: &str) -> Option<Self> {
        let cmd = match text {
            "manual" => Command::Manual,
            "pricebook" => Command::PriceBook,
            "links" => Command::Apps,
            "orion bots" => Command::Bots,
            "help" | "?" => Command::Help,
            _ => return None,
        };
        Some(cmd)
    }

    /// Commands only the owner may run; for everyone else they are plain chat.
    pub fn owner_only(self) -> bool {
        matches!(self, Command::Status | Command::Stats)
    }
}

/// An inbound text message after decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inbound {
    Command(Command),
    Chat(String),
}

impl Inbound {
    pub fn decode(text: &str) -> Self {
        let normalized = text.trim().to_lowercase();

        if let Some(rest) = normalized.strip_prefix('/') {
            let token = rest.split_whitespace().next().unwrap_or_default();
            let name = token.split('@').next().unwrap_or_default();
            if let Some(cmd) = Command::from_slash(name) {
                return Inbound::Command(cmd);
            }
        } else if let Some(cmd) = Command::from_alias(&normalized) {
            return Inbound::Command(cmd);
        }

        Inbound::Chat(text.to_string())
    }
}
