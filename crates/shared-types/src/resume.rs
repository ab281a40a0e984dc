use serde::{Deserialize, Serialize};

/// Choice shown by the resume builder when a candidate does not disclose
/// work authorization. Never printed.
pub const UNDISCLOSED_LEGAL_STATUS: &str = "Prefer not to say";

// ---------------------------------------------------------------------------
// Resume payload
// ---------------------------------------------------------------------------

/// Resume content posted by the resume builder. Every field is optional on
/// the wire; missing sections are simply left out of the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeData {
    pub personal: PersonalInfo,
    /// Free text, may carry simple HTML markup from a rich-text editor.
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<ProjectEntry>,
    pub publications: Vec<PublicationEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub style_options: StyleOptions,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub legal_status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub job_title: String,
    pub company: String,
    pub dates: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub graduation_year: String,
    pub gpa: String,
    pub achievements: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct SkillGroup {
    pub category: String,
    pub skills_list: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct ProjectEntry {
    pub title: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct PublicationEntry {
    pub title: String,
    pub date: String,
    pub authors: String,
    pub journal: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

/// Typography for the rendered resume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct StyleOptions {
    /// CSS-style family list; only the first family is used.
    pub font_family: String,
    pub font_size: f64,
    /// `#rrggbb` hex color for the name and section headings.
    pub accent_color: String,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            font_family: "Calibri".to_string(),
            font_size: 11.0,
            accent_color: "#34495e".to_string(),
        }
    }
}

impl StyleOptions {
    pub const MIN_FONT_SIZE: f64 = 8.0;
    pub const MAX_FONT_SIZE: f64 = 16.0;

    /// First family of the list, unquoted.
    pub fn primary_font(&self) -> String {
        let first = self
            .font_family
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .trim_matches(|c| c == '"' || c == '\'');
        if first.is_empty() {
            Self::default().font_family
        } else {
            first.to_string()
        }
    }

    /// Font size clamped to a printable range. NaN falls back to the default.
    pub fn clamped_font_size(&self) -> f64 {
        if self.font_size.is_nan() {
            return Self::default().font_size;
        }
        self.font_size.clamp(Self::MIN_FONT_SIZE, Self::MAX_FONT_SIZE)
    }

    /// Accent as six lowercase hex digits; anything malformed falls back to
    /// the default slate.
    pub fn accent_hex(&self) -> String {
        let hex = self.accent_color.trim().trim_start_matches('#');
        if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            hex.to_ascii_lowercase()
        } else {
            "34495e".to_string()
        }
    }
}

impl ResumeData {
    /// Download name: the candidate's name with whitespace runs collapsed to
    /// `_`, or `resume` when no name was given.
    pub fn file_name(&self, extension: &str) -> String {
        let base = self
            .personal
            .name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        let base = if base.is_empty() { "resume" } else { &base };
        format!("{base}.{extension}")
    }

    /// Email, phone, location and (unless withheld) legal status, skipping
    /// blanks.
    pub fn contact_items(&self) -> Vec<String> {
        let p = &self.personal;
        let legal = if p.legal_status.trim() == UNDISCLOSED_LEGAL_STATUS {
            ""
        } else {
            p.legal_status.as_str()
        };
        [p.email.as_str(), p.phone.as_str(), p.location.as_str(), legal]
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// A rendered resume returned by the server function, base64-encoded so it
/// travels as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumePdf {
    pub filename: String,
    pub pdf_base64: String,
}

// ---------------------------------------------------------------------------
// Text cleanup
// ---------------------------------------------------------------------------

/// Collapse runs of spaces and tabs, trim every line and drop blank lines.
pub fn clean_text(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Flatten rich-text markup into plain lines.
///
/// Paragraphs, list items and `<br>` each end a line; every other tag is
/// dropped and the common entities are decoded.
pub fn markup_lines(markup: &str) -> Vec<String> {
    let mut text = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        let Some(close) = rest[open..].find('>') else {
            // Unterminated tag: keep the remainder as text.
            text.push_str(&rest[open..]);
            rest = "";
            break;
        };
        let tag = rest[open + 1..open + close].trim().to_ascii_lowercase();
        let name = tag
            .trim_start_matches('/')
            .split(|c: char| c.is_whitespace() || c == '/')
            .next()
            .unwrap_or_default();
        if matches!(name, "br" | "p" | "li" | "div" | "ul" | "ol") {
            text.push('\n');
        }
        rest = &rest[open + close + 1..];
    }
    text.push_str(rest);

    clean_text(&decode_entities(&text))
        .lines()
        .map(str::to_string)
        .collect()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
