//! Renders a Bootstrap sign-up form and a Semantic UI profile form.
//!
//! Run with `cargo run --example signup_form`. Set `VERBOSE=1` to see
//! style resolution and field cleaning in the log.

use std::collections::HashMap;
use std::error::Error;

use styled_forms::fields::{
    boolean_field, char_field, choice_field, email_field, hidden_field, number_field,
    password_field,
};
use styled_forms::validation::RegexValidator;
use styled_forms::{FormBuilder, GridSpec, StyleOverride, StyledForm};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn signup_form() -> Result<StyledForm, Box<dyn Error>> {
    let overrides = StyleOverride::new()
        .grid(
            GridSpec::new()
                .row([("email", 6), ("password", 6)])
                .row([("address", 12)])
                .row([("city", 6), ("state", 4), ("zip", 2)])
                .row([("age", 4)])
                .row([("check", 8)]),
        )
        .errors_on_separate_row(false);

    let form = FormBuilder::new()
        .field(email_field("email", "Email", true).attr("placeholder", "Email"))
        .field(password_field("password", "Password", Some(8)))
        .field(char_field("address", "Address", 200, true).attr("placeholder", "1234 Main St"))
        .field(char_field("city", "City", 100, true))
        .field(choice_field(
            "state",
            "State",
            vec![("ca", "California"), ("ny", "New York")],
            true,
        ))
        .field(
            char_field("zip", "Zip", 10, true)
                .validator(RegexValidator::new(r"^\d{5}$", "Please provide a valid zip.")?),
        )
        .field(number_field("age", "Age", Some(18.0), None, false))
        .field(boolean_field("check", "Check me out").required())
        .field(hidden_field("next", Some("/welcome")))
        .overrides(overrides)
        .bootstrap()
        .build()?;
    Ok(form)
}

fn profile_form() -> Result<StyledForm, Box<dyn Error>> {
    let overrides = StyleOverride::from_json_str(
        r#"{
            "style": "semanticui",
            "grid": [
                [["first_name", 4], ["last_name", 4], ["username", 4]],
                [["city", 6], ["state", 4], ["zip", 2]]
            ],
            "css_classes": {"form": "ui form segment"}
        }"#,
    )?;

    let form = FormBuilder::new()
        .field(char_field("first_name", "First Name", 50, false))
        .field(char_field("last_name", "Last Name", 50, false))
        .field(
            char_field("username", "Username", 30, false)
                .clean_with(|_| Err("Please choose a username.".to_string())),
        )
        .field(char_field("city", "City", 100, false))
        .field(char_field("state", "State", 50, false))
        .field(char_field("zip", "Zip", 10, false))
        .overrides(overrides)
        .build()?;
    Ok(form)
}

fn main() -> Result<(), Box<dyn Error>> {
    let log_level = if std::env::var_os("VERBOSE").is_some() {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut signup = signup_form()?;
    let submitted: HashMap<String, String> = [
        ("email", "ada@example.com"),
        ("password", "short"),
        ("address", "12 Analytical Row"),
        ("city", "London"),
        ("state", "tx"),
        ("zip", "1234"),
        ("age", "16"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    signup.bind(submitted);
    let valid = signup.is_valid();
    info!(valid, errors = signup.errors().len(), "Sign-up form validated");
    println!("{}", signup.as_form("/signup", "post")?);

    let mut profile = profile_form()?;
    profile.bind(HashMap::from([("username".to_string(), "ada".to_string())]));
    let valid = profile.is_valid();
    info!(valid, form_class = %profile.form_class(), "Profile form validated");
    println!("{}", profile.as_form("/profile", "post")?);

    Ok(())
}
