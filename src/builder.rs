use std::fs;
use std::path::PathBuf;

use log::info;

use crate::config::{DraftConfig, FormDefaults, Limits};
use crate::extractors::{CaptionExtractor, Extractor};
use crate::form::RecipeForm;
use crate::model::{NewRecipe, RecipeDraft};
use crate::DraftError;

/// Represents the input source for a recipe
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Use pasted text content
    Text(String),
    /// Read the text from a file
    File(PathBuf),
}

/// Represents the desired output
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputMode {
    /// Submit the pre-filled form and return the create-recipe payload (default)
    #[default]
    Recipe,
    /// Return the draft without submitting it
    Draft,
}

/// Result of an import operation
#[derive(Debug, Clone)]
pub enum ImportResult {
    /// Payload ready for the create-recipe operation
    Recipe(NewRecipe),
    /// Draft as extracted from the text
    Draft(RecipeDraft),
}

/// Builder for configuring and running a text import
#[derive(Debug, Default)]
pub struct DraftImporterBuilder {
    source: Option<InputSource>,
    mode: OutputMode,
    limits: Option<Limits>,
    form_defaults: Option<FormDefaults>,
}

impl DraftImporterBuilder {
    /// Set the input source to pasted text
    ///
    /// # Example
    /// ```
    /// use recipe_draft::DraftImporter;
    ///
    /// let builder = DraftImporter::builder()
    ///     .text("Tomato soup\n- 4 tomatoes\n#soup");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(InputSource::Text(text.into()));
        self
    }

    /// Set the input source to a text file
    ///
    /// # Example
    /// ```
    /// use recipe_draft::DraftImporter;
    ///
    /// let builder = DraftImporter::builder()
    ///     .file("/path/to/caption.txt");
    /// ```
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(InputSource::File(path.into()));
        self
    }

    /// Override the extraction limits
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Override the values the form falls back to
    pub fn form_defaults(mut self, defaults: FormDefaults) -> Self {
        self.form_defaults = Some(defaults);
        self
    }

    /// Apply both sections of a loaded configuration
    pub fn config(self, config: DraftConfig) -> Self {
        self.limits(config.extractor).form_defaults(config.form)
    }

    /// Only extract the draft, skip submitting the form
    ///
    /// # Example
    /// ```
    /// use recipe_draft::{DraftImporter, ImportResult};
    ///
    /// let result = DraftImporter::builder()
    ///     .text("Quick salad 🥗 10 min")
    ///     .draft_only()
    ///     .build()
    ///     .unwrap();
    ///
    /// match result {
    ///     ImportResult::Draft(draft) => assert_eq!(draft.time, "10 min"),
    ///     ImportResult::Recipe(_) => unreachable!(),
    /// }
    /// ```
    pub fn draft_only(mut self) -> Self {
        self.mode = OutputMode::Draft;
        self
    }

    /// Run the import
    ///
    /// # Errors
    /// * `BuilderError` when no source was set
    /// * `Io` when the source file cannot be read
    /// * `MissingName` when the draft is submitted without a usable name
    pub fn build(self) -> Result<ImportResult, DraftError> {
        let source = self.source.ok_or_else(|| {
            DraftError::BuilderError(
                "No input source specified. Use .text() or .file()".to_string(),
            )
        })?;

        let text = match source {
            InputSource::Text(text) => text,
            InputSource::File(path) => {
                info!("Reading recipe text from {}", path.display());
                fs::read_to_string(&path)?
            }
        };

        let extractor = CaptionExtractor::with_limits(self.limits.unwrap_or_default());
        let draft = extractor.extract(&text);

        match self.mode {
            OutputMode::Draft => Ok(ImportResult::Draft(draft)),
            OutputMode::Recipe => {
                let form = RecipeForm::from_draft_with_defaults(
                    draft,
                    self.form_defaults.unwrap_or_default(),
                );
                Ok(ImportResult::Recipe(form.submit()?))
            }
        }
    }
}

/// Entry point for the builder API
pub struct DraftImporter;

impl DraftImporter {
    /// Create a new builder
    ///
    /// # Example
    /// ```
    /// use recipe_draft::DraftImporter;
    ///
    /// let result = DraftImporter::builder()
    ///     .text("Garlic bread\n- 1 baguette\n- 3 cloves garlic")
    ///     .build();
    /// assert!(result.is_ok());
    /// ```
    pub fn builder() -> DraftImporterBuilder {
        DraftImporterBuilder::default()
    }
}
