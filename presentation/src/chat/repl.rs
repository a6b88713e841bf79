//! REPL (Read-Eval-Print Loop) for the interactive coaching session

use crate::chat::form::{self, FormError};
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::SpinnerReporter;
use coach_application::use_cases::conversation::{
    Conversation, ConversationError, ProfileOutcome,
};
use coach_domain::profile::entities::ProfileSubmission;
use coach_domain::session::phase::ConversationPhase;
use coach_domain::AdvisorRole;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Interactive chat REPL
///
/// Runs the profile form once at startup, then loops on free-text
/// questions and slash commands. Empty lines are a no-op and never reach
/// the conversation.
pub struct ChatRepl {
    conversation: Conversation,
    show_progress: bool,
}

impl ChatRepl {
    pub fn new(conversation: Conversation) -> Self {
        Self {
            conversation,
            show_progress: true,
        }
    }

    /// Set whether to show the generation spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("wellness-coach").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        if self.conversation.phase() == ConversationPhase::Collecting {
            self.run_form_and_submit(&mut rl).await?;
        }

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim().to_string();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(&line, &mut rl).await? {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(&line);
                    self.process_question(&line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Wellness Coach - Chat Session        │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", ConsoleFormatter::role_line(self.conversation.role()));
        if !self.conversation.generation_available() {
            println!(
                "{}",
                ConsoleFormatter::notice_line(
                    "No API key configured; BMI is computed but no plan can be generated."
                )
            );
        }
        println!();
        println!("Commands:");
        println!("  /help       - Show this help");
        println!("  /role NAME  - Switch advisor (nutrition or fitness)");
        println!("  /profile    - Submit the profile form again");
        println!("  /transcript - Replay the conversation so far");
        println!("  /quit       - Exit");
        println!();
    }

    /// Handle slash commands. Returns true if the REPL should exit.
    async fn handle_command(&mut self, cmd: &str, rl: &mut DefaultEditor) -> RlResult<bool> {
        let mut parts = cmd.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or(cmd);
        let arg = parts.next().map(str::trim).unwrap_or("");

        match name {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                return Ok(true);
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /role NAME       - Switch advisor (nutrition or fitness)");
                println!("  /profile         - Submit the profile form again");
                println!("  /transcript      - Replay the conversation so far");
                println!("  /quit, /exit, /q - Exit");
                println!();
            }
            "/role" => self.handle_role_command(arg),
            "/profile" => self.run_form_and_submit(rl).await?,
            "/transcript" => {
                let transcript = self.conversation.transcript();
                if transcript.is_empty() {
                    println!("(transcript is empty)");
                } else {
                    println!();
                    println!("{}", ConsoleFormatter::transcript(transcript));
                    println!();
                }
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        Ok(false)
    }

    fn handle_role_command(&mut self, arg: &str) {
        if arg.is_empty() {
            println!("{}", ConsoleFormatter::role_line(self.conversation.role()));
            println!("Available roles:");
            for role in AdvisorRole::all() {
                println!("  - {}", role);
            }
            return;
        }
        match arg.parse::<AdvisorRole>() {
            Ok(role) => {
                self.conversation.select_role(role);
                println!("{}", ConsoleFormatter::role_line(role));
            }
            Err(e) => println!("{}", ConsoleFormatter::error_line(&e)),
        }
    }

    /// Run the profile form; a Ctrl-C/Ctrl-D during a field aborts it.
    async fn run_form_and_submit(&mut self, rl: &mut DefaultEditor) -> RlResult<()> {
        let Some(submission) = Self::read_profile_form(rl)? else {
            println!("(form cancelled)");
            return Ok(());
        };

        let spinner = self.spinner("Generating your plan...");
        let result = self.conversation.submit_profile(submission).await;
        spinner.finish();

        match result {
            Ok(outcome) => {
                println!("{}", ConsoleFormatter::bmi_line(outcome.bmi()));
                match outcome {
                    ProfileOutcome::PlanGenerated { .. } => {
                        println!();
                        if let Some(entry) = self.conversation.transcript().last() {
                            println!("{}", ConsoleFormatter::transcript_entry(entry));
                        }
                        println!();
                        println!(
                            "Ask me anything about your {}!",
                            self.conversation.role().display_name()
                        );
                    }
                    ProfileOutcome::BmiOnly { .. } => {
                        println!(
                            "{}",
                            ConsoleFormatter::notice_line(
                                "No API key configured; plan generation is disabled."
                            )
                        );
                    }
                }
            }
            Err(e) => {
                if let Some(bmi) = self.conversation.profile_bmi() {
                    println!("{}", ConsoleFormatter::bmi_line(bmi));
                }
                println!("{}", ConsoleFormatter::error_line(&e.to_string()));
                if matches!(e, ConversationError::Generation(_)) {
                    println!(
                        "{}",
                        ConsoleFormatter::notice_line("Run /profile again to retry.")
                    );
                }
            }
        }
        Ok(())
    }

    fn read_profile_form(rl: &mut DefaultEditor) -> RlResult<Option<ProfileSubmission>> {
        println!("Let's fill in your profile.");

        let Some(age) = Self::read_field(rl, "Age (10-100): ", form::parse_age)? else {
            return Ok(None);
        };
        let Some(weight_kg) =
            Self::read_field(rl, "Current weight in kg (30-200): ", form::parse_weight_kg)?
        else {
            return Ok(None);
        };
        let Some(height_cm) =
            Self::read_field(rl, "Height in cm (100-250): ", form::parse_height_cm)?
        else {
            return Ok(None);
        };
        let Some(expected_weight_kg) = Self::read_field(
            rl,
            "Target weight in kg (30-200): ",
            form::parse_expected_weight_kg,
        )?
        else {
            return Ok(None);
        };

        Ok(Some(ProfileSubmission {
            age,
            weight_kg,
            height_cm,
            expected_weight_kg,
        }))
    }

    /// Read one field, re-prompting on non-numeric input. `None` means
    /// the user aborted the form.
    fn read_field<T>(
        rl: &mut DefaultEditor,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, FormError>,
    ) -> RlResult<Option<T>> {
        loop {
            match rl.readline(prompt) {
                Ok(line) => match parse(&line) {
                    Ok(value) => return Ok(Some(value)),
                    Err(e) => println!("{}", ConsoleFormatter::error_line(&e.to_string())),
                },
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
                Err(e) => return Err(e),
            }
        }
    }

    async fn process_question(&mut self, question: &str) {
        let spinner = self.spinner("Thinking...");
        let result = self.conversation.ask(question).await;
        spinner.finish();

        match result {
            Ok(_) => {
                println!();
                if let Some(entry) = self.conversation.transcript().last() {
                    println!("{}", ConsoleFormatter::transcript_entry(entry));
                }
                println!();
            }
            Err(ConversationError::PlanNotReady) => {
                println!(
                    "{}",
                    ConsoleFormatter::error_line("No plan has been generated yet.")
                );
                println!(
                    "{}",
                    ConsoleFormatter::notice_line(
                        "Submit your profile with /profile first (an API key is required)."
                    )
                );
            }
            Err(e) => {
                println!("{}", ConsoleFormatter::error_line(&e.to_string()));
            }
        }
    }

    fn spinner(&self, message: &str) -> SpinnerReporter {
        if self.show_progress {
            SpinnerReporter::start(message)
        } else {
            SpinnerReporter::disabled()
        }
    }
}
