use std::io::{self, BufRead, Write};

use log::debug;

use crate::clipboard::ClipboardSink;
use crate::provider::TokenProvider;

/// The single screen: a device id line, a nonce field, a token field,
/// and copy actions for the two read-out values.
pub struct Screen<P, C> {
    device_id: String,
    nonce: String,
    token: String,
    provider: P,
    clipboard: C,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    DeviceId,
    CopyDeviceId,
    SetNonce(String),
    SetToken(String),
    Generate,
    CopyToken,
    Show,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head {
            "id" => Some(Command::DeviceId),
            "copy-id" => Some(Command::CopyDeviceId),
            "nonce" => Some(Command::SetNonce(rest.to_string())),
            "token" => Some(Command::SetToken(rest.to_string())),
            "generate" => Some(Command::Generate),
            "copy" => Some(Command::CopyToken),
            "show" => Some(Command::Show),
            "help" => Some(Command::Help),
            "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

impl<P: TokenProvider, C: ClipboardSink> Screen<P, C> {
    pub fn new(device_id: String, provider: P, clipboard: C) -> Self {
        Self {
            device_id,
            nonce: String::new(),
            token: String::new(),
            provider,
            clipboard,
        }
    }

    /// Forward the current nonce to the integrity service and wait for
    /// its answer. A failed call produces no token and leaves the
    /// field as it was.
    pub async fn generate(&mut self) {
        match self.provider.request_token(&self.nonce).await {
            Ok(token) => self.token = token,
            Err(e) => debug!("token request produced nothing: {e}"),
        }
    }

    pub fn set_nonce(&mut self, text: String) {
        self.nonce = text;
    }

    pub fn set_token(&mut self, text: String) {
        self.token = text;
    }

    pub fn copy_device_id(&mut self) {
        self.clipboard.copy(&self.device_id);
        println!("copied!");
    }

    /// Copy the token field. Unavailable while the field is blank;
    /// returns whether anything was copied.
    pub fn copy_token(&mut self) -> bool {
        if self.token_blank() {
            return false;
        }
        self.clipboard.copy(&self.token);
        println!("copied!");
        true
    }

    fn token_blank(&self) -> bool {
        self.token.trim().is_empty()
    }

    fn render(&self) {
        println!();
        println!("DeviceId = {}", self.device_id);
        println!("nonce: {}", self.nonce);
        println!("token: {}", self.token);
        println!();
    }

    fn help() {
        println!("commands:");
        println!("  id             print the device id");
        println!("  copy-id        copy the device id to the clipboard");
        println!("  nonce <text>   set the nonce field");
        println!("  token <text>   edit the token field");
        println!("  generate       request an integrity token for the nonce");
        println!("  copy           copy the token to the clipboard");
        println!("  show           reprint the screen");
        println!("  quit           leave");
    }

    /// Read commands until quit or end of input.
    pub async fn run(&mut self) -> io::Result<()> {
        self.render();
        Self::help();

        let mut input = io::stdin().lock();
        let mut line = String::new();
        loop {
            print!("> ");
            io::stdout().flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Some(Command::DeviceId) => println!("DeviceId = {}", self.device_id),
                Some(Command::CopyDeviceId) => self.copy_device_id(),
                Some(Command::SetNonce(text)) => self.set_nonce(text),
                Some(Command::SetToken(text)) => self.set_token(text),
                Some(Command::Generate) => {
                    self.generate().await;
                    println!("token: {}", self.token);
                }
                Some(Command::CopyToken) => {
                    if !self.copy_token() {
                        println!("nothing to copy");
                    }
                }
                Some(Command::Show) => self.render(),
                Some(Command::Quit) => return Ok(()),
                Some(Command::Help) | None => Self::help(),
            }
        }
    }
}
