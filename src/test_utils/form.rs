use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form<'a>(html: &'a Html, selector: &str) -> ElementRef<'a> {
    html.select(&Selector::parse(selector).unwrap())
        .next()
        .unwrap_or_else(|| panic!("No form found for {selector:?}"))
}

#[track_caller]
pub(crate) fn assert_form_posts_to(form: &ElementRef<'_>, endpoint: &str) {
    let method = form.value().attr("method").unwrap_or_default();
    let action = form.value().attr("action").unwrap_or_default();

    assert_eq!(
        method.to_lowercase(),
        "post",
        "want form with method=\"post\", got {method:?}"
    );
    assert_eq!(
        action, endpoint,
        "want form with action=\"{endpoint}\", got {action:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    for input in form.select(&Selector::parse("input").unwrap()) {
        let input_name = input.value().attr("name").unwrap_or_default();

        if input_name == name {
            let input_type = input.value().attr("type").unwrap_or_default();
            let input_required = input.value().attr("required");

            assert_eq!(
                input_type, type_,
                "want input with type \"{type_}\", got {input_type:?}"
            );

            assert!(
                input_required.is_some(),
                "want input with name {name} to have the required attribute but got none"
            );

            return;
        }
    }

    panic!("No input found with name \"{name}\" and type \"{type_}\"");
}

/// Asserts the form has a `select` named `name` offering exactly `values`.
#[track_caller]
pub(crate) fn assert_form_select(form: &ElementRef<'_>, name: &str, values: &[&str]) {
    let selector = Selector::parse(&format!("select[name={name}]")).unwrap();
    let select = form
        .select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No select found with name \"{name}\""));

    let got_values: Vec<&str> = select
        .select(&Selector::parse("option").unwrap())
        .map(|option| option.value().attr("value").unwrap_or_default())
        .collect();

    assert_eq!(got_values, values, "unexpected options for select {name}");
}

#[track_caller]
pub(crate) fn assert_form_submit_button(form: &ElementRef<'_>, name: &str) {
    let selector = Selector::parse(&format!("button[name={name}]")).unwrap();
    let submit_button = form
        .select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No button found with name \"{name}\""));

    assert_eq!(
        submit_button.value().attr("type").unwrap_or_default(),
        "submit",
        "want submit button with type=\"submit\""
    );
}
