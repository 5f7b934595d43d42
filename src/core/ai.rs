// gemini integration - plain language notes about a medication list

use crate::Error;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Clone)]
pub struct Gemini {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

// what we send to gemini
#[derive(Serialize)]
struct Request {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

// what gemini sends back, anything we don't read is ignored
#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl Gemini {
    pub fn new(api_key: Option<String>) -> Result<Self, Error> {
        // explicit key first, then the usual env var names
        let api_key = match api_key {
            Some(key) => key,
            None => std::env::var("GEMINI_API_KEY")
                .or_else(|_| std::env::var("GOOGLE_API_KEY"))
                .map_err(|_| Error::MissingApiKey)?,
        };

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub async fn check_interactions<S: AsRef<str>>(
        &self,
        medications: &[S],
    ) -> Result<String, Error> {
        let list = medications
            .iter()
            .map(|m| m.as_ref())
            .collect::<Vec<_>>()
            .join(", ");

        let prompt = format!(
            r#"You are a medication safety assistant.
Analyze the following medications for possible interactions.
Use non-diagnostic, patient-friendly language.
Medications: {list}

If no major interactions exist, say:
"No major interactions found, but consult a healthcare professional.""#
        );

        let request = Request {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let url = format!(
            "{}/v1/models/{}:generateContent",
            self.base_url, self.model
        );
        tracing::debug!(
            model = %self.model,
            medications = medications.len(),
            "requesting ai notes"
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error = response.text().await?;
            return Err(Error::Gemini(error));
        }

        let response: Response = response.json().await?;
        Ok(extract_text(response))
    }
}

// join every part of the first candidate, gemini splits long answers
fn extract_text(response: Response) -> String {
    let parts = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts);

    match parts {
        None => "No AI response available.".to_string(),
        Some(parts) => {
            let text = parts
                .into_iter()
                .map(|p| p.text.unwrap_or_default())
                .collect::<Vec<_>>()
                .join("\n");

            if text.trim().is_empty() {
                "AI returned an empty response.".to_string()
            } else {
                text
            }
        }
    }
}
