use crate::errors::PromptError;
use crate::models::{SiteInfo, UserInput};
use secrecy::SecretString;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

const INSTRUCTIONS: &str = "\
Platform.sh GitHub integration setup

This connects a GitHub repository to your Platform.sh project and sets the
environment variables the site needs to push content back to GitHub.

Before continuing, have the following ready:
  1. The ID of your Platform.sh project (Project settings > General).
  2. A Platform.sh API token (Account settings > API tokens).
  3. A GitHub personal access token with the `repo` and `admin:repo_hook`
     scopes (https://github.com/settings/tokens).
  4. The GitHub owner (user or organization) and repository name.

Press Enter to continue...";

pub const QUESTION_PROJECT_ID: &str = "Platform.sh project ID: ";
pub const QUESTION_API_TOKEN: &str = "Platform.sh API token: ";
pub const QUESTION_GITHUB_PAT: &str = "GitHub personal access token: ";
pub const QUESTION_GITHUB_OWNER: &str = "GitHub owner (user or organization): ";
pub const QUESTION_GITHUB_REPO: &str = "GitHub repository name: ";

/// Asks the operator for the setup values, one line per question
pub struct PromptCollector<R, W> {
    input: R,
    output: W,
}

impl PromptCollector<BufReader<Stdin>, Stdout> {
    /// Creates a collector bound to standard input and output
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptCollector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Shows the instructions, waits for acknowledgment, then asks the five
    /// questions in order. Consumes the collector so the input is released
    /// once every answer is in.
    pub fn collect(mut self, site: &SiteInfo) -> Result<UserInput, PromptError> {
        writeln!(self.output, "{}", INSTRUCTIONS).map_err(|e| PromptError::Write { source: e })?;
        self.read_answer("acknowledgment")?;

        let project_id = self.ask(QUESTION_PROJECT_ID)?;
        let api_token = SecretString::new(self.ask(QUESTION_API_TOKEN)?);
        let github_pat = SecretString::new(self.ask(QUESTION_GITHUB_PAT)?);
        let github_owner = self.ask(QUESTION_GITHUB_OWNER)?;
        let github_repo = self.ask(QUESTION_GITHUB_REPO)?;

        tracing::debug!("Collected input for project {}", project_id);

        Ok(UserInput {
            project_id,
            api_token,
            github_pat,
            github_owner,
            github_repo,
            site_dir_name: site.site_name.clone(),
        })
    }

    /// Writes one question and blocks until a line is submitted
    pub fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", question).map_err(|e| PromptError::Write { source: e })?;
        self.output
            .flush()
            .map_err(|e| PromptError::Write { source: e })?;
        self.read_answer(question.trim_end_matches([':', ' ']))
    }

    fn read_answer(&mut self, question: &str) -> Result<String, PromptError> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| PromptError::Read { source: e })?;

        if read == 0 {
            return Err(PromptError::InputClosed {
                question: question.to_string(),
            });
        }

        Ok(strip_line_ending(line))
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Cursor;

    fn site() -> SiteInfo {
        SiteInfo {
            dir_name: "mysite".to_string(),
            site_name: "mysite".to_string(),
        }
    }

    #[test]
    fn test_collect_returns_exact_lines() {
        let input = Cursor::new("\nproj1\ntok1\npat1\noctocat\nmyrepo\n");
        let mut output = Vec::new();

        let answers = PromptCollector::new(input, &mut output)
            .collect(&site())
            .unwrap();

        assert_eq!(answers.project_id, "proj1");
        assert_eq!(answers.api_token.expose_secret(), "tok1");
        assert_eq!(answers.github_pat.expose_secret(), "pat1");
        assert_eq!(answers.github_owner, "octocat");
        assert_eq!(answers.github_repo, "myrepo");
        assert_eq!(answers.site_dir_name, "mysite");
    }

    #[test]
    fn test_collect_accepts_empty_answers() {
        let input = Cursor::new("anything\n\n\n\n\n\n");
        let answers = PromptCollector::new(input, Vec::new())
            .collect(&site())
            .unwrap();

        assert_eq!(answers.project_id, "");
        assert_eq!(answers.api_token.expose_secret(), "");
        assert_eq!(answers.github_pat.expose_secret(), "");
        assert_eq!(answers.github_owner, "");
        assert_eq!(answers.github_repo, "");
    }

    #[test]
    fn test_collect_keeps_surrounding_whitespace() {
        let input = Cursor::new("\n proj1 \r\ntok1\r\npat1\noctocat\nmyrepo");
        let answers = PromptCollector::new(input, Vec::new())
            .collect(&site())
            .unwrap();

        assert_eq!(answers.project_id, " proj1 ");
        assert_eq!(answers.api_token.expose_secret(), "tok1");
        // Last line without a trailing newline is still an answer
        assert_eq!(answers.github_repo, "myrepo");
    }

    #[test]
    fn test_collect_writes_instructions_and_questions_in_order() {
        let input = Cursor::new("\na\nb\nc\nd\ne\n");
        let mut output = Vec::new();
        PromptCollector::new(input, &mut output)
            .collect(&site())
            .unwrap();

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.starts_with("Platform.sh GitHub integration setup"));

        let positions: Vec<usize> = [
            QUESTION_PROJECT_ID,
            QUESTION_API_TOKEN,
            QUESTION_GITHUB_PAT,
            QUESTION_GITHUB_OWNER,
            QUESTION_GITHUB_REPO,
        ]
        .iter()
        .map(|q| printed.find(q).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_collect_fails_when_input_closes_before_acknowledgment() {
        let err = PromptCollector::new(Cursor::new(""), Vec::new())
            .collect(&site())
            .unwrap_err();

        match err {
            PromptError::InputClosed { question } => assert_eq!(question, "acknowledgment"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_collect_fails_when_input_closes_early() {
        let input = Cursor::new("\nproj1\ntok1\n");
        let err = PromptCollector::new(input, Vec::new())
            .collect(&site())
            .unwrap_err();

        match err {
            PromptError::InputClosed { question } => {
                assert_eq!(question, "GitHub personal access token")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
