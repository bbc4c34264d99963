//! Console adapter for chatting from a terminal

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::application::services::ChatService;
use crate::domain::entities::Conversation;

const PROMPT: &str = "> ";

/// Interactive chat over stdin/stdout, keeping the session's turns in memory
pub struct ConsoleAdapter {
    chat: ChatService,
    conversation: Conversation,
}

impl ConsoleAdapter {
    pub fn new(chat: ChatService) -> Self {
        Self {
            chat,
            conversation: Conversation::new(),
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Answer one question and record both turns
    pub fn ask(&mut self, question: &str) -> String {
        let reply = self.chat.answer(question, &self.conversation);
        self.conversation.push_user(question);
        self.conversation.push_assistant(reply.clone());
        reply
    }

    /// Run against the process's stdin and stdout
    pub async fn run(&mut self) -> std::io::Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.run_with(stdin, stdout).await
    }

    /// Read questions line by line until EOF, `exit` or `quit`
    pub async fn run_with<R, W>(&mut self, reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        tracing::info!("Starting console chat ({})", self.chat.responder_name());
        writer.write_all(b"Ask me anything about Minecraft or its mods. Type 'exit' to quit.\n").await?;

        let mut lines = reader.lines();
        loop {
            writer.write_all(PROMPT.as_bytes()).await?;
            writer.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let question = line.trim();
            if question.is_empty() {
                continue;
            }
            if question.eq_ignore_ascii_case("exit") || question.eq_ignore_ascii_case("quit") {
                break;
            }

            let reply = self.ask(question);
            writer.write_all(format!("\n{}\n\n", reply).as_bytes()).await?;
        }

        writer.write_all(b"\n").await?;
        writer.flush().await?;
        tracing::info!(turns = self.conversation.len(), "Console chat ended");
        Ok(())
    }
}
