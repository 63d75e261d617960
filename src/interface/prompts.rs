use dialoguer::Input;

use crate::error::Result;
use crate::interface::transport::Transport;

/// Interactive terminal chat using a dialoguer prompt per message.
pub struct PromptTransport {
    prompt: String,
}

impl PromptTransport {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

impl Default for PromptTransport {
    fn default() -> Self {
        Self::new("You")
    }
}

impl Transport for PromptTransport {
    fn receive(&mut self) -> Result<Option<String>> {
        let input: String = Input::new()
            .with_prompt(&self.prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(input))
    }

    fn send(&mut self, text: &str) -> Result<()> {
        println!();
        println!("{}", text);
        println!();
        Ok(())
    }
}
