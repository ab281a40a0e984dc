use std::sync::LazyLock;

use chrono::Datelike;
use ecow::EcoVec;
use shared_types::{clean_text, markup_lines, AppError, ResumeData};
use typst::diag::{FileError, FileResult, SourceDiagnostic};
use typst::foundations::{Bytes, Datetime};
use typst::layout::PagedDocument;
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};

// ---------------------------------------------------------------------------
// Source building
// ---------------------------------------------------------------------------

/// Quote `s` as a Typst string literal.
pub fn typst_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Typst array literal. A single element keeps its trailing comma so it is
/// not read as a parenthesized expression.
fn typst_array(items: impl IntoIterator<Item = String>) -> String {
    let items: Vec<String> = items.into_iter().collect();
    if items.is_empty() {
        "()".to_string()
    } else {
        format!("({},)", items.join(", "))
    }
}

/// One resume entry as a Typst dictionary.
fn entry(heading: &str, meta: &str, bullets: &[String]) -> String {
    format!(
        "(heading: {}, meta: {}, bullets: {})",
        typst_str(heading.trim()),
        typst_str(meta),
        typst_array(bullets.iter().map(|b| typst_str(b))),
    )
}

/// Join the non-blank parts with ` | `.
fn meta_line(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Build a complete Typst source for `resume` by prepending `#let`
/// bindings to the `resume.typ` template.
///
/// Entries without their headline field (job title, degree, project title,
/// publication title, certification name) are skipped, as are skill groups
/// with no skills.
pub fn build_resume_source(resume: &ResumeData) -> String {
    let style = &resume.style_options;

    let experience = resume
        .experience
        .iter()
        .filter(|e| !e.job_title.trim().is_empty())
        .map(|e| {
            entry(
                &e.job_title,
                &meta_line(&[e.company.as_str(), e.dates.as_str()]),
                &markup_lines(&e.description),
            )
        });

    let education = resume
        .education
        .iter()
        .filter(|e| !e.degree.trim().is_empty())
        .map(|e| {
            let heading = match e.institution.trim() {
                "" => e.degree.trim().to_string(),
                institution => format!("{}, {institution}", e.degree.trim()),
            };
            let gpa = match e.gpa.trim() {
                "" => String::new(),
                gpa => format!("GPA: {gpa}"),
            };
            entry(
                &heading,
                &meta_line(&[e.graduation_year.as_str(), gpa.as_str()]),
                &markup_lines(&e.achievements),
            )
        });

    let skills = resume
        .skills
        .iter()
        .map(|s| (s.category.trim(), clean_text(&s.skills_list)))
        .filter(|(_, items)| !items.is_empty())
        .map(|(label, items)| {
            format!(
                "(label: {}, items: {})",
                typst_str(label),
                typst_str(&items.replace('\n', ", ")),
            )
        });

    let projects = resume
        .projects
        .iter()
        .filter(|p| !p.title.trim().is_empty())
        .map(|p| entry(&p.title, p.date.trim(), &markup_lines(&p.description)));

    let publications = resume
        .publications
        .iter()
        .filter(|p| !p.title.trim().is_empty())
        .map(|p| {
            let mut lines = Vec::new();
            let byline = [p.authors.trim(), p.journal.trim()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" - ");
            if !byline.is_empty() {
                lines.push(byline);
            }
            if !p.link.trim().is_empty() {
                lines.push(format!("Link: {}", p.link.trim()));
            }
            entry(&p.title, p.date.trim(), &lines)
        });

    let certifications = resume
        .certifications
        .iter()
        .filter(|c| !c.name.trim().is_empty())
        .map(|c| entry(&c.name, &meta_line(&[c.issuer.as_str(), c.date.as_str()]), &[]));

    let bindings = format!(
        r##"#let name = {name}
#let contact = {contact}
#let font_family = {font_family}
#let font_size = {font_size:.1}
#let accent_color = {accent_color}
#let summary = {summary}
#let experience = {experience}
#let education = {education}
#let skills = {skills}
#let projects = {projects}
#let publications = {publications}
#let certifications = {certifications}

"##,
        name = typst_str(resume.personal.name.trim()),
        contact = typst_array(resume.contact_items().iter().map(|c| typst_str(c))),
        font_family = typst_str(&style.primary_font()),
        font_size = style.clamped_font_size(),
        accent_color = typst_str(&style.accent_hex()),
        summary = typst_array(markup_lines(&resume.summary).iter().map(|l| typst_str(l))),
        experience = typst_array(experience),
        education = typst_array(education),
        skills = typst_array(skills),
        projects = typst_array(projects),
        publications = typst_array(publications),
        certifications = typst_array(certifications),
    );

    let template = include_str!("../../../templates/resume.typ");
    format!("{bindings}{template}")
}

// ---------------------------------------------------------------------------
// Static singletons, loaded on first render
// ---------------------------------------------------------------------------

static FONTS: LazyLock<Vec<Font>> = LazyLock::new(|| {
    typst_assets::fonts()
        .flat_map(|data| Font::iter(Bytes::new(data)))
        .collect()
});

static FONT_BOOK: LazyLock<LazyHash<FontBook>> =
    LazyLock::new(|| LazyHash::new(FontBook::from_fonts(FONTS.iter())));

static LIBRARY: LazyLock<LazyHash<Library>> = LazyLock::new(|| LazyHash::new(Library::default()));

// ---------------------------------------------------------------------------
// World: a single in-memory source, no file access
// ---------------------------------------------------------------------------

struct ResumeWorld {
    source: Source,
}

impl ResumeWorld {
    fn new(source_text: &str) -> Self {
        Self {
            source: Source::detached(source_text),
        }
    }
}

impl World for ResumeWorld {
    fn library(&self) -> &LazyHash<Library> {
        &LIBRARY
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &FONT_BOOK
    }

    fn main(&self) -> FileId {
        self.source.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.source.id() {
            Ok(self.source.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rooted_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rooted_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        FONTS.get(index).cloned()
    }

    fn today(&self, offset: Option<i64>) -> Option<Datetime> {
        let now = chrono::Utc::now();
        let naive = match offset {
            Some(hours) => {
                let tz = chrono::FixedOffset::east_opt((hours as i32) * 3600)?;
                now.with_timezone(&tz).naive_local()
            }
            None => now.naive_utc(),
        };
        Datetime::from_ymd(
            naive.year(),
            (naive.month0() + 1) as u8,
            (naive.day0() + 1) as u8,
        )
    }
}

// ---------------------------------------------------------------------------
// Compilation
// ---------------------------------------------------------------------------

/// Render `resume` to PDF bytes.
pub async fn render_resume_pdf(resume: &ResumeData) -> Result<Vec<u8>, AppError> {
    let source = build_resume_source(resume);
    let pdf = compile_typst(&source).await?;
    tracing::info!(bytes = pdf.len(), "rendered resume pdf");
    Ok(pdf)
}

/// Compile a Typst source string into PDF bytes on a blocking thread.
pub async fn compile_typst(source: &str) -> Result<Vec<u8>, AppError> {
    let source = source.to_owned();

    tokio::task::spawn_blocking(move || compile_typst_sync(&source))
        .await
        .map_err(|e| AppError::internal(format!("Typst task panicked: {e}")))?
}

fn compile_typst_sync(source: &str) -> Result<Vec<u8>, AppError> {
    let world = ResumeWorld::new(source);

    let warned = typst::compile::<PagedDocument>(&world);
    for warning in &warned.warnings {
        tracing::debug!(message = %warning.message, "typst warning");
    }
    let document = warned
        .output
        .map_err(|diagnostics| format_diagnostics("Typst compilation failed", &diagnostics))?;

    typst_pdf::pdf(&document, &typst_pdf::PdfOptions::default())
        .map_err(|diagnostics| format_diagnostics("PDF export failed", &diagnostics))
}

fn format_diagnostics(prefix: &str, diagnostics: &EcoVec<SourceDiagnostic>) -> AppError {
    let msgs: Vec<String> = diagnostics.iter().map(|d| d.message.to_string()).collect();
    tracing::error!(errors = %msgs.join("; "), "{prefix}");
    AppError::internal(format!("{prefix}: {}", msgs.join("; ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{
        CertificationEntry, EducationEntry, ExperienceEntry, PublicationEntry, SkillGroup,
    };

    fn binding<'a>(source: &'a str, name: &str) -> &'a str {
        let prefix = format!("#let {name} = ");
        source
            .lines()
            .find_map(|line| line.strip_prefix(prefix.as_str()))
            .unwrap()
    }

    #[test]
    fn typst_str_escapes_quotes_backslashes_and_newlines() {
        assert_eq!(typst_str(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(typst_str(r"C:\dev"), r#""C:\\dev""#);
        assert_eq!(typst_str("a\r\nb"), r#""a\nb""#);
        assert_eq!(typst_str("#1 & $5"), r##""#1 & $5""##);
    }

    #[test]
    fn single_item_array_keeps_trailing_comma() {
        assert_eq!(typst_array(Vec::new()), "()");
        assert_eq!(typst_array(vec!["1".to_string()]), "(1,)");
        assert_eq!(typst_array(vec!["1".into(), "2".into()]), "(1, 2,)");
    }

    #[test]
    fn blank_resume_binds_empty_sections() {
        let source = build_resume_source(&ResumeData::default());
        assert_eq!(binding(&source, "name"), r#""""#);
        assert_eq!(binding(&source, "contact"), "()");
        assert_eq!(binding(&source, "font_family"), r#""Calibri""#);
        assert_eq!(binding(&source, "font_size"), "11.0");
        assert_eq!(binding(&source, "accent_color"), r#""34495e""#);
        assert_eq!(binding(&source, "experience"), "()");
        assert!(source.contains("#entries(\"Experience\", experience)"));
    }

    #[test]
    fn entries_without_headline_are_skipped() {
        let mut resume = ResumeData::default();
        resume.experience = vec![
            ExperienceEntry {
                job_title: "Engineer".into(),
                company: "Acme".into(),
                dates: "2020 - 2024".into(),
                description: "<ul><li>Built things</li></ul>".into(),
            },
            ExperienceEntry::default(),
        ];
        resume.certifications = vec![CertificationEntry {
            name: String::new(),
            issuer: "Nobody".into(),
            date: "2021".into(),
        }];

        let source = build_resume_source(&resume);
        assert_eq!(
            binding(&source, "experience"),
            r#"((heading: "Engineer", meta: "Acme | 2020 - 2024", bullets: ("Built things",)),)"#
        );
        assert_eq!(binding(&source, "certifications"), "()");
    }

    #[test]
    fn education_heading_and_meta() {
        let mut resume = ResumeData::default();
        resume.education = vec![EducationEntry {
            degree: "BSc Computer Science".into(),
            institution: "State U".into(),
            graduation_year: "2019".into(),
            gpa: "3.8".into(),
            achievements: String::new(),
        }];
        let source = build_resume_source(&resume);
        assert_eq!(
            binding(&source, "education"),
            r#"((heading: "BSc Computer Science, State U", meta: "2019 | GPA: 3.8", bullets: ()),)"#
        );
    }

    #[test]
    fn skills_are_cleaned_and_empty_groups_dropped() {
        let mut resume = ResumeData::default();
        resume.skills = vec![
            SkillGroup {
                category: "Languages".into(),
                skills_list: "Rust,   Go\n\nSQL".into(),
            },
            SkillGroup {
                category: "Empty".into(),
                skills_list: "   ".into(),
            },
        ];
        let source = build_resume_source(&resume);
        assert_eq!(
            binding(&source, "skills"),
            r#"((label: "Languages", items: "Rust, Go, SQL"),)"#
        );
    }

    #[test]
    fn publication_byline_and_link() {
        let mut resume = ResumeData::default();
        resume.publications = vec![PublicationEntry {
            title: "On Hiring".into(),
            date: "2022".into(),
            authors: "J. Doe".into(),
            journal: "HR Quarterly".into(),
            link: "https://example.com/p".into(),
        }];
        let source = build_resume_source(&resume);
        assert_eq!(
            binding(&source, "publications"),
            r#"((heading: "On Hiring", meta: "2022", bullets: ("J. Doe - HR Quarterly", "Link: https://example.com/p",)),)"#
        );
    }

    #[test]
    fn contact_line_and_style_are_bound() {
        let mut resume = ResumeData::default();
        resume.personal.name = "Jane \"JD\" Doe".into();
        resume.personal.email = "jane@example.com".into();
        resume.style_options.accent_color = "#FF0000".into();
        resume.style_options.font_size = 12.5;
        let source = build_resume_source(&resume);
        assert_eq!(binding(&source, "name"), r#""Jane \"JD\" Doe""#);
        assert_eq!(binding(&source, "contact"), r#"("jane@example.com",)"#);
        assert_eq!(binding(&source, "accent_color"), r#""ff0000""#);
        assert_eq!(binding(&source, "font_size"), "12.5");
    }
}
