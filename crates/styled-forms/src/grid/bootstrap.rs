//! Bootstrap grid: `form-row` rows holding `col-*` columns.

use ironhtml::typed::Element;
use ironhtml_elements::Div;

use super::{GridBody, GridDialect, GridRenderer, Placement, Width};
use crate::error::{FormError, Result};

const MAX_COLUMNS: i64 = 12;

/// Renders rows with Bootstrap's 12-column grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct BootstrapGrid;

impl GridRenderer for BootstrapGrid {
    fn dialect(&self) -> GridDialect {
        GridDialect::Bootstrap
    }

    fn width_class(&self, field: &str, width: Option<&Width>) -> Result<String> {
        match width {
            None => Ok("col".to_string()),
            Some(Width::Class(class)) => Ok(class.clone()),
            Some(Width::Columns(n)) if (1..=MAX_COLUMNS).contains(n) => Ok(format!("col-{n}")),
            Some(Width::Columns(n)) => Err(FormError::InvalidGridWidth {
                dialect: "Bootstrap",
                field: field.to_string(),
                width: *n,
                min: 1,
                max: MAX_COLUMNS,
            }),
        }
    }

    fn render_rows(&self, rows: &[Vec<Placement<'_>>], body: &GridBody) -> Result<String> {
        let mut html = String::new();

        for row in rows {
            let columns = row
                .iter()
                .map(|p| Ok((self.width_class(p.field, p.width)?, p.fragment)))
                .collect::<Result<Vec<_>>>()?;

            let row_el = Element::<Div>::new().class("form-row").children(
                columns.iter(),
                |(class, fragment), col: Element<Div>| col.class(class).raw(*fragment),
            );
            html.push_str(&row_el.render());
            html.push('\n');
        }

        let hidden = Element::<Div>::new().class("form-row").raw(&body.hidden);
        html.push_str(&hidden.render());
        Ok(html)
    }
}
