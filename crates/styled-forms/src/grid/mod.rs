//! Grid layouts: placing rendered fields into rows and columns.
//!
//! A [`GridSpec`] lists rows of `(field, width)` cells. How a width turns
//! into markup depends on the [`GridDialect`]:
//!
//! - `Default` ignores the layout and stacks fields top to bottom.
//! - `Bootstrap` emits `form-row` rows with `col-{1..12}` columns.
//! - `SemanticUi` emits `fields` groups with `{one..sixteen} wide field`
//!   columns.
//!
//! An empty grid always renders like `Default`.

mod bootstrap;
mod semantic;

pub use bootstrap::BootstrapGrid;
pub use semantic::SemanticUiGrid;

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde_json::Value;

use crate::error::{FormError, Result};

/// The mutually exclusive grid conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GridDialect {
    #[default]
    Default,
    Bootstrap,
    SemanticUi,
}

impl GridDialect {
    /// Returns the renderer implementing this dialect.
    pub fn renderer(self) -> &'static dyn GridRenderer {
        match self {
            Self::Default => &DefaultGrid,
            Self::Bootstrap => &BootstrapGrid,
            Self::SemanticUi => &SemanticUiGrid,
        }
    }

    /// Whether the grid places separate-row error fragments itself.
    ///
    /// Bootstrap keeps errors inside the row templates.
    pub fn positions_errors(self) -> bool {
        !matches!(self, Self::Bootstrap)
    }
}

impl fmt::Display for GridDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Default => "Default",
            Self::Bootstrap => "Bootstrap",
            Self::SemanticUi => "Semantic-UI",
        })
    }
}

/// The width of one grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Width {
    /// Dialect-specific column count.
    Columns(i64),
    /// Passed through as a CSS width class.
    Class(String),
}

impl From<i64> for Width {
    fn from(columns: i64) -> Self {
        Self::Columns(columns)
    }
}

impl From<i32> for Width {
    fn from(columns: i32) -> Self {
        Self::Columns(i64::from(columns))
    }
}

impl From<&str> for Width {
    fn from(class: &str) -> Self {
        Self::Class(class.to_string())
    }
}

impl From<String> for Width {
    fn from(class: String) -> Self {
        Self::Class(class)
    }
}

/// One cell of a grid row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    /// Name of the field placed in this cell.
    pub field: String,
    /// Cell width; `None` lets the dialect pick an automatic width.
    pub width: Option<Width>,
}

impl GridCell {
    /// A cell with an explicit width.
    pub fn new(field: impl Into<String>, width: impl Into<Width>) -> Self {
        Self {
            field: field.into(),
            width: Some(width.into()),
        }
    }

    /// A cell with the dialect's automatic width.
    pub fn auto(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            width: None,
        }
    }

    fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(field) => Ok(Self::auto(field.as_str())),
            Value::Array(pair) if pair.len() == 2 => {
                let field = pair[0].as_str().ok_or_else(|| {
                    FormError::InvalidConfig(format!("grid field name must be a string, got {}", pair[0]))
                })?;
                // Integers beyond i64 are reported verbatim as a bad type.
                let width = match (&pair[1], pair[1].as_i64()) {
                    (Value::String(class), _) => Width::Class(class.clone()),
                    (Value::Number(_), Some(columns)) => Width::Columns(columns),
                    (other, _) => {
                        return Err(FormError::InvalidGridWidthType {
                            field: field.to_string(),
                            value: other.to_string(),
                        })
                    }
                };
                Ok(Self {
                    field: field.to_string(),
                    width: Some(width),
                })
            }
            other => Err(FormError::InvalidConfig(format!(
                "grid cell must be a field name or a [name, width] pair, got {other}"
            ))),
        }
    }
}

/// Ordered rows of grid cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridSpec {
    rows: Vec<Vec<GridCell>>,
}

impl GridSpec {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row of `(field, width)` cells.
    #[must_use]
    pub fn row<N, W>(self, cells: impl IntoIterator<Item = (N, W)>) -> Self
    where
        N: Into<String>,
        W: Into<Width>,
    {
        self.cells(cells.into_iter().map(|(f, w)| GridCell::new(f, w)))
    }

    /// Appends a row of prepared cells.
    #[must_use]
    pub fn cells(mut self, cells: impl IntoIterator<Item = GridCell>) -> Self {
        self.rows.push(cells.into_iter().collect());
        self
    }

    /// Parses a grid from its JSON form.
    ///
    /// ```json
    /// [[["email", 6], ["password", 6]], [["address", "col-md-8"], "zip"]]
    /// ```
    pub fn from_json(value: &Value) -> Result<Self> {
        let rows = value
            .as_array()
            .ok_or_else(|| FormError::InvalidConfig(format!("grid must be an array of rows, got {value}")))?;
        let mut grid = Self::new();
        for row in rows {
            let cells = row
                .as_array()
                .ok_or_else(|| FormError::InvalidConfig(format!("grid row must be an array, got {row}")))?;
            grid.rows.push(
                cells
                    .iter()
                    .map(GridCell::from_json)
                    .collect::<Result<Vec<_>>>()?,
            );
        }
        Ok(grid)
    }

    /// The declared rows.
    pub fn rows(&self) -> &[Vec<GridCell>] {
        &self.rows
    }

    /// Whether the grid declares no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The rendered pieces a grid lays out.
#[derive(Debug, Clone, Default)]
pub struct GridBody {
    /// Visible field fragments in declaration order.
    pub fields: Vec<(String, String)>,
    /// Error fragments the grid positions itself, by field name.
    pub errors: HashMap<String, String>,
    /// Concatenated hidden-field markup.
    pub hidden: String,
}

impl GridBody {
    fn fragment(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, html)| html.as_str())
    }

    fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }
}

/// A grid cell resolved against a [`GridBody`].
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a> {
    /// Field name.
    pub field: &'a str,
    /// Declared width; `None` means automatic.
    pub width: Option<&'a Width>,
    /// Rendered field markup.
    pub fragment: &'a str,
}

/// Lays out a [`GridBody`] according to a [`GridSpec`].
pub trait GridRenderer: Sync {
    /// The dialect this renderer implements.
    fn dialect(&self) -> GridDialect;

    /// Returns the wrapper class for one cell, checking the dialect's
    /// width bound.
    fn width_class(&self, field: &str, width: Option<&Width>) -> Result<String>;

    /// Renders already-placed rows.
    fn render_rows(&self, rows: &[Vec<Placement<'_>>], body: &GridBody) -> Result<String>;

    /// Checks every width of `grid` against the dialect's bound.
    fn validate(&self, grid: &GridSpec) -> Result<()> {
        for cell in grid.rows().iter().flatten() {
            self.width_class(&cell.field, cell.width.as_ref())?;
        }
        Ok(())
    }

    /// Renders `body` laid out by `grid`.
    fn render(&self, grid: &GridSpec, body: &GridBody) -> Result<String> {
        if grid.is_empty() {
            return Ok(render_flat(body));
        }
        let rows = place(grid, body)?;
        self.render_rows(&rows, body)
    }
}

/// Stacks fields in declaration order, ignoring any layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultGrid;

impl GridRenderer for DefaultGrid {
    fn dialect(&self) -> GridDialect {
        GridDialect::Default
    }

    fn width_class(&self, _field: &str, _width: Option<&Width>) -> Result<String> {
        Ok(String::new())
    }

    fn render_rows(&self, _rows: &[Vec<Placement<'_>>], body: &GridBody) -> Result<String> {
        Ok(render_flat(body))
    }

    fn render(&self, _grid: &GridSpec, body: &GridBody) -> Result<String> {
        Ok(render_flat(body))
    }
}

/// A grid bound to the dialect of the style that owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridLayout {
    dialect: GridDialect,
    spec: GridSpec,
}

impl GridLayout {
    /// Wraps `spec` for `dialect`, checking every width up front.
    pub fn new(dialect: GridDialect, spec: GridSpec) -> Result<Self> {
        dialect.renderer().validate(&spec)?;
        Ok(Self { dialect, spec })
    }

    /// A layout with no rows: fields render top to bottom.
    pub fn flat(dialect: GridDialect) -> Self {
        Self {
            dialect,
            spec: GridSpec::new(),
        }
    }

    /// The dialect the layout renders with.
    pub fn dialect(&self) -> GridDialect {
        self.dialect
    }

    /// The declared rows.
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Renders `body` with this layout.
    pub fn render(&self, body: &GridBody) -> Result<String> {
        self.dialect.renderer().render(&self.spec, body)
    }
}

pub(crate) fn render_flat(body: &GridBody) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(body.fields.len() + 1);
    for (name, fragment) in &body.fields {
        parts.push(fragment);
        if let Some(error) = body.error(name) {
            parts.push(error);
        }
    }
    if !body.hidden.is_empty() {
        parts.push(&body.hidden);
    }
    parts.join("\n")
}

/// Resolves every cell of `grid` against `body`.
///
/// Fields the grid does not mention are placed in one trailing row of
/// automatic-width cells, in declaration order.
fn place<'a>(grid: &'a GridSpec, body: &'a GridBody) -> Result<Vec<Vec<Placement<'a>>>> {
    let mut mentioned = HashSet::new();
    let mut rows = Vec::with_capacity(grid.rows().len() + 1);

    for row in grid.rows() {
        let mut placed = Vec::with_capacity(row.len());
        for cell in row {
            let fragment = body
                .fragment(&cell.field)
                .ok_or_else(|| FormError::UnknownGridField(cell.field.clone()))?;
            mentioned.insert(cell.field.as_str());
            placed.push(Placement {
                field: &cell.field,
                width: cell.width.as_ref(),
                fragment,
            });
        }
        rows.push(placed);
    }

    let trailing: Vec<Placement<'a>> = body
        .fields
        .iter()
        .filter(|(name, _)| !mentioned.contains(name.as_str()))
        .map(|(name, fragment)| Placement {
            field: name,
            width: None,
            fragment,
        })
        .collect();
    if !trailing.is_empty() {
        rows.push(trailing);
    }
    Ok(rows)
}

#[cfg(test)]
pub(crate) fn body_of(fields: &[(&str, &str)]) -> GridBody {
    GridBody {
        fields: fields
            .iter()
            .map(|(n, h)| ((*n).to_string(), (*h).to_string()))
            .collect(),
        ..GridBody::default()
    }
}
