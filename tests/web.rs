#![cfg(target_arch = "wasm32")]

mod common;

use dosewizard::backend::HttpBackend;
use dosewizard::config::{ControllerConfig, ElementIds, Endpoints};
use dosewizard::page::{
    load_models, submit_prediction, DomPage, DoseWizard, PageView, NO_MODELS_FOUND,
};
use dosewizard::protocol::HttpReply;
use dosewizard::utils::errors::ControllerError;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

use common::CannedTransport;

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r#"
<form id="prediction-form">
    <input type="text" id="blood-glucose">
    <input type="text" id="meal">
    <select id="model"></select>
    <button type="submit">Predict</button>
</form>
<div id="result"></div>
"#;

fn fresh_document() -> Document {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html(PAGE);
    document
}

fn element<T: JsCast>(document: &Document, id: &str) -> T {
    document.get_element_by_id(id).unwrap().dyn_into::<T>().unwrap()
}

fn rendered_options(document: &Document) -> Vec<(String, String, bool)> {
    let select: HtmlSelectElement = element(document, "model");
    (0..select.length())
        .map(|index| {
            let option = select
                .item(index)
                .unwrap()
                .dyn_into::<HtmlOptionElement>()
                .unwrap();
            (option.value(), option.text(), option.disabled())
        })
        .collect()
}

#[wasm_bindgen_test]
async fn dom_page_renders_listing_in_order() {
    let document = fresh_document();
    let page = DomPage::from_document(&document, &ElementIds::default()).unwrap();
    let backend = HttpBackend::new(
        CannedTransport::listing(Some(HttpReply::new(200, r#"["m1", "m2"]"#))),
        Endpoints::default(),
    );
    load_models(&page, &backend).await;
    assert_eq![
        rendered_options(&document),
        vec![
            (String::from("m1"), String::from("m1"), false),
            (String::from("m2"), String::from("m2"), false)
        ]
    ];
}

#[wasm_bindgen_test]
async fn dom_page_renders_disabled_placeholder() {
    let document = fresh_document();
    let page = DomPage::from_document(&document, &ElementIds::default()).unwrap();
    let backend = HttpBackend::new(
        CannedTransport::listing(Some(HttpReply::new(200, "[]"))),
        Endpoints::default(),
    );
    load_models(&page, &backend).await;
    assert_eq![
        rendered_options(&document),
        vec![(String::new(), String::from(NO_MODELS_FOUND), true)]
    ];
    assert_eq![page.selected_model(), ""];
}

#[wasm_bindgen_test]
async fn dom_page_submission_renders_dosage_as_text() {
    let document = fresh_document();
    let page = DomPage::from_document(&document, &ElementIds::default()).unwrap();
    let listing = HttpBackend::new(
        CannedTransport::listing(Some(HttpReply::new(200, r#"["m1"]"#))),
        Endpoints::default(),
    );
    load_models(&page, &listing).await;
    element::<HtmlInputElement>(&document, "blood-glucose").set_value("120");
    element::<HtmlInputElement>(&document, "meal").set_value("pizza");

    let backend = HttpBackend::new(
        CannedTransport::prediction(Some(HttpReply::new(200, r#"{"prediction":[5.678]}"#))),
        Endpoints::default(),
    );
    submit_prediction(&page, &backend).await;
    assert_eq![page.result_text(), "Predicted Insulin Dosage: 5.68 Unit"];

    let sent = backend.transport().requests.borrow()[0].body.clone().unwrap();
    let sent: serde_json::Value = serde_json::from_str(&sent).unwrap();
    assert_eq![sent["model_name"], "m1"];
    assert_eq![sent["blood_glucose"], "120"];
    assert_eq![sent["meal"], "pizza"];
}

#[wasm_bindgen_test]
async fn backend_error_markup_is_not_interpreted() {
    let document = fresh_document();
    let page = DomPage::from_document(&document, &ElementIds::default()).unwrap();
    let listing = HttpBackend::new(
        CannedTransport::listing(Some(HttpReply::new(200, r#"["m1"]"#))),
        Endpoints::default(),
    );
    load_models(&page, &listing).await;
    let backend = HttpBackend::new(
        CannedTransport::prediction(Some(HttpReply::new(200, r#"{"error":"<b>bad</b>"}"#))),
        Endpoints::default(),
    );
    submit_prediction(&page, &backend).await;
    let result: web_sys::Element = element(&document, "result");
    assert_eq![result.child_element_count(), 0];
    assert_eq![page.result_text(), "Error: <b>bad</b>"];
}

#[wasm_bindgen_test]
fn missing_elements_are_reported() {
    let document = fresh_document();
    let ids = ElementIds {
        result: String::from("no-such-element"),
        ..ElementIds::default()
    };
    assert![matches![
        DomPage::from_document(&document, &ids),
        Err(ControllerError::MissingElement(id)) if id == "no-such-element"
    ]];
}

#[wasm_bindgen_test]
fn configuration_round_trips_through_js_interface() {
    let wizard = DoseWizard::post_yaml("endpoints:\n  baseUrl: \"https://api.example\"\n").unwrap();
    let config = ControllerConfig::from_json(&wizard.get_json().unwrap()).unwrap();
    assert_eq![config.endpoints.models_url(), "https://api.example/models"];
    assert![DoseWizard::post_json("not json").is_err()];
}
