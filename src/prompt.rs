//! Prompt Builder
//!
//! Fills the five article templates with the run's title, header list, link
//! list, target header and content. Substitution is exact-text and single
//! pass: every occurrence of a known `{token}` is replaced, and substituted
//! values are never scanned again.

use crate::error::ArticleError;

mod overrides;
pub mod templates;

pub use overrides::PromptOverrides;

/// Placeholder tokens understood by the templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Title,
    Headers,
    Links,
    TargetHeader,
    Content,
}

impl Placeholder {
    pub const ALL: [Placeholder; 5] = [
        Placeholder::Title,
        Placeholder::Headers,
        Placeholder::Links,
        Placeholder::TargetHeader,
        Placeholder::Content,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Title => "{title}",
            Placeholder::Headers => "{headers}",
            Placeholder::Links => "{links}",
            Placeholder::TargetHeader => "{target_header}",
            Placeholder::Content => "{content}",
        }
    }
}

/// The five article prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKind {
    HeaderPlan,
    Introduction,
    SectionWriter,
    Faq,
    Humanizer,
}

impl PromptKind {
    pub const ALL: [PromptKind; 5] = [
        PromptKind::HeaderPlan,
        PromptKind::Introduction,
        PromptKind::SectionWriter,
        PromptKind::Faq,
        PromptKind::Humanizer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PromptKind::HeaderPlan => "header-plan",
            PromptKind::Introduction => "introduction",
            PromptKind::SectionWriter => "section-writer",
            PromptKind::Faq => "faq-writer",
            PromptKind::Humanizer => "humanizer",
        }
    }

    /// Placeholders a template of this kind may use.
    pub fn allowed(self) -> &'static [Placeholder] {
        match self {
            PromptKind::HeaderPlan => &[Placeholder::Title],
            PromptKind::Introduction | PromptKind::Faq => {
                &[Placeholder::Title, Placeholder::Headers, Placeholder::Links]
            }
            PromptKind::SectionWriter => &[
                Placeholder::Title,
                Placeholder::Headers,
                Placeholder::Links,
                Placeholder::TargetHeader,
            ],
            PromptKind::Humanizer => &[Placeholder::Content],
        }
    }

    /// Placeholders a template of this kind must contain.
    pub fn required(self) -> &'static [Placeholder] {
        match self {
            PromptKind::HeaderPlan => &[Placeholder::Title],
            PromptKind::Introduction | PromptKind::Faq => &[],
            PromptKind::SectionWriter => &[Placeholder::TargetHeader],
            PromptKind::Humanizer => &[Placeholder::Content],
        }
    }

    pub fn builtin(self) -> &'static str {
        match self {
            PromptKind::HeaderPlan => templates::HEADER_PLAN,
            PromptKind::Introduction => templates::INTRODUCTION,
            PromptKind::SectionWriter => templates::SECTION_WRITER,
            PromptKind::Faq => templates::FAQ_WRITER,
            PromptKind::Humanizer => templates::HUMANIZER,
        }
    }
}

/// Current values for each placeholder; unset placeholders are left as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptVars<'a> {
    pub title: Option<&'a str>,
    pub headers: Option<&'a str>,
    pub links: Option<&'a str>,
    pub target_header: Option<&'a str>,
    pub content: Option<&'a str>,
}

impl<'a> PromptVars<'a> {
    fn value(&self, placeholder: Placeholder) -> Option<&'a str> {
        match placeholder {
            Placeholder::Title => self.title,
            Placeholder::Headers => self.headers,
            Placeholder::Links => self.links,
            Placeholder::TargetHeader => self.target_header,
            Placeholder::Content => self.content,
        }
    }
}

/// Substitute every bound placeholder in `template`.
pub fn render(template: &str, vars: &PromptVars<'_>) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let candidate = &rest[open..];

        let bound = Placeholder::ALL.iter().find_map(|placeholder| {
            let token = placeholder.token();
            if candidate.starts_with(token) {
                vars.value(*placeholder).map(|value| (token.len(), value))
            } else {
                None
            }
        });

        match bound {
            Some((token_len, value)) => {
                rendered.push_str(value);
                rest = &candidate[token_len..];
            }
            None => {
                rendered.push('{');
                rest = &candidate[1..];
            }
        }
    }
    rendered.push_str(rest);
    rendered
}

/// Check a template against the placeholder contract of its kind.
pub fn validate_template(kind: PromptKind, template: &str) -> Result<(), ArticleError> {
    for placeholder in kind.required() {
        if !template.contains(placeholder.token()) {
            return Err(ArticleError::InvalidTemplate {
                template: kind.name(),
                reason: format!("missing required placeholder {}", placeholder.token()),
            });
        }
    }
    for placeholder in Placeholder::ALL {
        if template.contains(placeholder.token()) && !kind.allowed().contains(&placeholder) {
            return Err(ArticleError::InvalidTemplate {
                template: kind.name(),
                reason: format!("placeholder {} is not available here", placeholder.token()),
            });
        }
    }
    Ok(())
}

/// Inputs shared by every article prompt.
#[derive(Debug, Clone, Copy)]
pub struct PromptContext<'a> {
    pub title: &'a str,
    pub headers: &'a str,
    pub links: &'a str,
}

/// Resolved templates for one run.
#[derive(Debug, Clone)]
pub struct PromptSet {
    header_plan: String,
    introduction: String,
    section_writer: String,
    faq: String,
    humanizer: String,
}

impl Default for PromptSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PromptSet {
    pub fn builtin() -> Self {
        Self {
            header_plan: templates::HEADER_PLAN.to_string(),
            introduction: templates::INTRODUCTION.to_string(),
            section_writer: templates::SECTION_WRITER.to_string(),
            faq: templates::FAQ_WRITER.to_string(),
            humanizer: templates::HUMANIZER.to_string(),
        }
    }

    /// Built-ins with any configured override files applied and validated.
    pub fn from_overrides(overrides: &PromptOverrides) -> Result<Self, ArticleError> {
        let mut set = Self::builtin();
        for kind in PromptKind::ALL {
            if let Some(template) = overrides.load(kind)? {
                set.replace(kind, template)?;
            }
        }
        Ok(set)
    }

    /// Replace one template after checking its placeholders.
    pub fn replace(&mut self, kind: PromptKind, template: String) -> Result<(), ArticleError> {
        validate_template(kind, &template)?;
        *self.slot_mut(kind) = template;
        Ok(())
    }

    pub fn template(&self, kind: PromptKind) -> &str {
        match kind {
            PromptKind::HeaderPlan => &self.header_plan,
            PromptKind::Introduction => &self.introduction,
            PromptKind::SectionWriter => &self.section_writer,
            PromptKind::Faq => &self.faq,
            PromptKind::Humanizer => &self.humanizer,
        }
    }

    fn slot_mut(&mut self, kind: PromptKind) -> &mut String {
        match kind {
            PromptKind::HeaderPlan => &mut self.header_plan,
            PromptKind::Introduction => &mut self.introduction,
            PromptKind::SectionWriter => &mut self.section_writer,
            PromptKind::Faq => &mut self.faq,
            PromptKind::Humanizer => &mut self.humanizer,
        }
    }

    pub fn header_plan(&self, title: &str) -> String {
        render(
            &self.header_plan,
            &PromptVars {
                title: Some(title),
                ..PromptVars::default()
            },
        )
    }

    pub fn introduction(&self, ctx: PromptContext<'_>) -> String {
        render(&self.introduction, &Self::article_vars(ctx))
    }

    pub fn section(&self, ctx: PromptContext<'_>, target_header: &str) -> String {
        render(
            &self.section_writer,
            &PromptVars {
                target_header: Some(target_header),
                ..Self::article_vars(ctx)
            },
        )
    }

    pub fn faq(&self, ctx: PromptContext<'_>) -> String {
        render(&self.faq, &Self::article_vars(ctx))
    }

    pub fn humanize(&self, content: &str) -> String {
        render(
            &self.humanizer,
            &PromptVars {
                content: Some(content),
                ..PromptVars::default()
            },
        )
    }

    fn article_vars(ctx: PromptContext<'_>) -> PromptVars<'_> {
        PromptVars {
            title: Some(ctx.title),
            headers: Some(ctx.headers),
            links: Some(ctx.links),
            ..PromptVars::default()
        }
    }
}
