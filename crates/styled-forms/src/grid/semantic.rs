//! Semantic UI grid: `fields` groups holding `{n} wide field` columns.

use ironhtml::typed::Element;
use ironhtml_elements::Div;

use super::{GridBody, GridDialect, GridRenderer, Placement, Width};
use crate::error::{FormError, Result};

const NUMBER_WORDS: [&str; 16] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
];

/// Renders rows with Semantic UI's 16-column grid.
///
/// When the form keeps errors on a separate row, each field's error
/// fragment follows the field inside the same column.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemanticUiGrid;

impl GridRenderer for SemanticUiGrid {
    fn dialect(&self) -> GridDialect {
        GridDialect::SemanticUi
    }

    fn width_class(&self, field: &str, width: Option<&Width>) -> Result<String> {
        match width {
            None => Ok("field".to_string()),
            Some(Width::Class(class)) => Ok(format!("{class} wide field")),
            Some(Width::Columns(n)) => usize::try_from(*n)
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| NUMBER_WORDS.get(i))
                .map(|word| format!("{word} wide field"))
                .ok_or_else(|| FormError::InvalidGridWidth {
                    dialect: "Semantic-UI",
                    field: field.to_string(),
                    width: *n,
                    min: 1,
                    max: 16,
                }),
        }
    }

    fn render_rows(&self, rows: &[Vec<Placement<'_>>], body: &GridBody) -> Result<String> {
        let mut html = String::new();

        for row in rows {
            let columns = row
                .iter()
                .map(|p| {
                    let class = self.width_class(p.field, p.width)?;
                    Ok((class, p.fragment, body.error(p.field)))
                })
                .collect::<Result<Vec<_>>>()?;

            let group = Element::<Div>::new().class("field").child::<Div, _>(|fields| {
                fields.class("fields").children(
                    columns.iter(),
                    |(class, fragment, error), col: Element<Div>| {
                        let col = col.class(class).raw(*fragment);
                        match error {
                            Some(error) => col.raw(*error),
                            None => col,
                        }
                    },
                )
            });
            html.push_str(&group.render());
            html.push('\n');
        }

        let hidden = Element::<Div>::new().class("form-row").raw(&body.hidden);
        html.push_str(&hidden.render());
        Ok(html)
    }
}
