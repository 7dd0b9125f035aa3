//! View rendering for the portfolio generator component.
//!
//! The UI is split across two tabs: "Editor" (profile form, template picker
//! and project list) and "Previsualización" (the live portfolio render). The
//! preview resolves the selected template against the static catalog and
//! falls back to the default definition for unknown keys, so a bad key can
//! never break the render.
//!
//! Notes
//! - All user-facing messages remain in Spanish by design.
//! - The profile description goes through the markdown pipeline before being
//!   injected into the preview.

use pulldown_cmark::{html, Parser};
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use common::model::profile::ProfileField;
use common::model::project::{Project, ProjectField};
use common::model::template::{lookup_or_default, TemplateDefinition, TEMPLATES};

use super::helpers::split_skills;
use super::messages::Msg;
use super::state::PortfolioGenerator;

/// Main view function for the portfolio generator component.
/// Renders the toolbar, tab bar, and the active pane (editor or preview).
pub fn view(component: &PortfolioGenerator, ctx: &Context<PortfolioGenerator>) -> Html {
    let link = ctx.link();

    html! {
        <div class="generator-root">
            { build_toolbar(link) }
            { build_tab_bar(component, link) }

            {
                if component.active_tab == "editor" {
                    build_editor_tab(component, link)
                } else {
                    build_preview_tab(component)
                }
            }
        </div>
    }
}

fn build_toolbar(link: &Scope<PortfolioGenerator>) -> Html {
    html! {
        <div class="icon-toolbar">
            { icon_button("save", "Generar", link.callback(|_| Msg::Generate), true) }
        </div>
    }
}

/// Builds the tab bar for switching between Editor and Preview.
/// Shows a red dot if the state differs from the last generated snapshot.
fn build_tab_bar(component: &PortfolioGenerator, link: &Scope<PortfolioGenerator>) -> Html {
    let dirty = component.is_dirty();

    html! {
        <div class="tab-bar">
            <button
                class={classes!("tab-btn", if component.active_tab == "editor" { "active" } else { "" })}
                onclick={link.callback(|_| Msg::SetTab("editor".to_string()))}
                style="position: relative;"
            >
                {"Editor"}
                {
                    if dirty {
                        html! {
                            <span
                                title="Cambios sin guardar"
                                style="
                                        position: absolute;
                                        top: 4px;
                                        right: 6px;
                                        width: 8px;
                                        height: 8px;
                                        background: #e53935;
                                        border-radius: 50%;
                                        display: inline-block;
                                        vertical-align: middle;
                                    "
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </button>
            <button
                class={classes!("tab-btn", if component.active_tab == "preview" { "active" } else { "" })}
                onclick={link.callback(|_| Msg::SetTab("preview".to_string()))}
            >
                {"Previsualización"}
            </button>
        </div>
    }
}

fn build_editor_tab(component: &PortfolioGenerator, link: &Scope<PortfolioGenerator>) -> Html {
    html! {
        <>
            { build_profile_form(component, link) }
            { build_template_picker(component, link) }
            { build_project_list(component, link) }
        </>
    }
}

/// Builds the profile section: name, title, description and skills fields.
/// Every keystroke flows into the state container and refreshes the preview.
fn build_profile_form(component: &PortfolioGenerator, link: &Scope<PortfolioGenerator>) -> Html {
    let profile = &component.portfolio.profile;

    html! {
        <div class="profile-form">
            { profile_input(link, "Nombre", "Tu nombre", profile.name.clone(), ProfileField::Name) }
            { profile_input(link, "Título", "p. ej. Senior Developer", profile.title.clone(), ProfileField::Title) }
            <label class="field">
                <span class="field-label">{"Descripción"}</span>
                <textarea
                    placeholder="Cuéntale al mundo sobre ti (acepta markdown)"
                    value={profile.description.clone()}
                    rows="4"
                    oninput={link.callback(|e: InputEvent| {
                        let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                        Msg::UpdateProfile(ProfileField::Description, value)
                    })}
                />
            </label>
            { profile_input(link, "Habilidades", "Rust, Yew, CSS (separadas por comas)", profile.skills.clone(), ProfileField::Skills) }
        </div>
    }
}

/// Renders a labeled single-line text input bound to one profile field.
fn profile_input(
    link: &Scope<PortfolioGenerator>,
    label: &str,
    placeholder: &str,
    value: String,
    field: ProfileField,
) -> Html {
    html! {
        <label class="field">
            <span class="field-label">{ label }</span>
            <input
                type="text"
                placeholder={placeholder.to_string()}
                value={value}
                oninput={link.callback(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::UpdateProfile(field, value)
                })}
            />
        </label>
    }
}

/// Builds the template picker: one button per catalog entry, the active one
/// highlighted. Selection is unconditional; validity is the preview's problem.
fn build_template_picker(component: &PortfolioGenerator, link: &Scope<PortfolioGenerator>) -> Html {
    html! {
        <div class="template-picker">
            <span class="field-label">{"Plantilla"}</span>
            {
                TEMPLATES.iter().map(|def| {
                    let key = def.key;
                    let active = component.portfolio.selected_template == key;
                    html! {
                        <button
                            class={classes!("template-btn", if active { "active" } else { "" })}
                            style={format!("border-color: {};", def.accent)}
                            onclick={link.callback(move |_| Msg::SelectTemplate(key.to_string()))}
                        >
                            { def.display_name }
                        </button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

/// Builds the project list: one editable card per project plus the add
/// button. Cards never get removed; once added a project stays for the
/// session.
fn build_project_list(component: &PortfolioGenerator, link: &Scope<PortfolioGenerator>) -> Html {
    html! {
        <div class="project-list">
            <span class="field-label">{"Proyectos"}</span>
            { for component.portfolio.projects.iter().map(|p| build_project_card(p, link)) }
            <button class="add-project-btn" onclick={link.callback(|_| Msg::AddProject)}>
                <i class="material-icons">{"add"}</i>
                {"Añadir proyecto"}
            </button>
        </div>
    }
}

fn build_project_card(project: &Project, link: &Scope<PortfolioGenerator>) -> Html {
    let id = project.id;

    html! {
        <div class="project-card" key={id.to_string()}>
            <input
                type="text"
                placeholder="Título del proyecto"
                value={project.title.clone()}
                oninput={link.callback(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::UpdateProject(id, ProjectField::Title, value)
                })}
            />
            <textarea
                placeholder="Descripción"
                value={project.description.clone()}
                rows="2"
                oninput={link.callback(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                    Msg::UpdateProject(id, ProjectField::Description, value)
                })}
            />
            <input
                type="url"
                placeholder="https://..."
                value={project.link.clone()}
                oninput={link.callback(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::UpdateProject(id, ProjectField::Link, value)
                })}
            />
        </div>
    }
}

/// Builds the live preview pane styled with the selected template's tokens.
fn build_preview_tab(component: &PortfolioGenerator) -> Html {
    let portfolio = &component.portfolio;
    let def = lookup_or_default(&portfolio.selected_template);

    html! {
        <div
            class="portfolio-preview"
            style={format!("background: {}; color: {}; padding: 24px;", def.background, def.text_color)}
        >
            <h1>{ non_empty_or(&portfolio.profile.name, "Tu nombre") }</h1>
            <h2 style={format!("color: {};", def.accent)}>
                { non_empty_or(&portfolio.profile.title, "Tu título profesional") }
            </h2>
            {
                if portfolio.profile.description.is_empty() {
                    html! { <p class="placeholder">{"Cuéntale al mundo sobre ti."}</p> }
                } else {
                    html! {
                        <div class="preview-description">
                            { Html::from_html_unchecked(compute_description_html(&portfolio.profile.description)) }
                        </div>
                    }
                }
            }
            { build_skill_chips(&portfolio.profile.skills, def) }
            { build_preview_projects(&portfolio.projects, def) }
        </div>
    }
}

fn build_skill_chips(raw: &str, def: &TemplateDefinition) -> Html {
    let skills = split_skills(raw);
    if skills.is_empty() {
        return html! {};
    }

    html! {
        <div class="skill-chips">
            { for skills.into_iter().map(|skill| html! {
                <span
                    class="chip"
                    style={format!("background: {}; color: {}; border-radius: 12px; padding: 2px 10px; margin-right: 6px;", def.accent, def.background)}
                >
                    { skill }
                </span>
            }) }
        </div>
    }
}

fn build_preview_projects(projects: &[Project], def: &TemplateDefinition) -> Html {
    if projects.is_empty() {
        return html! {};
    }

    html! {
        <div class="preview-projects">
            <h3>{"Proyectos"}</h3>
            { for projects.iter().map(|project| html! {
                <div
                    class="preview-project"
                    key={project.id.to_string()}
                    style={format!("border-left: 3px solid {}; padding-left: 12px; margin-bottom: 12px;", def.accent)}
                >
                    <strong>{ non_empty_or(&project.title, "Proyecto sin título") }</strong>
                    {
                        if project.description.is_empty() {
                            html! {}
                        } else {
                            html! { <p>{ project.description.clone() }</p> }
                        }
                    }
                    {
                        if project.link.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <a
                                    href={project.link.clone()}
                                    target="_blank"
                                    style={format!("color: {};", def.accent)}
                                >
                                    { project.link.clone() }
                                </a>
                            }
                        }
                    }
                </div>
            }) }
        </div>
    }
}

/// Renders a toolbar button with a Material icon and a label.
fn icon_button(icon_name: &str, label: &str, on_click: Callback<MouseEvent>, wide: bool) -> Html {
    let class = if wide { "icon-btn wide" } else { "icon-btn" };
    html! {
        <button class={class} onclick={on_click.clone()}>
            <i class="material-icons">{icon_name}</i>
            <span class="icon-label">{label}</span>
        </button>
    }
}

fn non_empty_or(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Runs the profile description through the markdown pipeline used by the
/// preview pane. Returns an `AttrValue` for Yew.
fn compute_description_html(text: &str) -> AttrValue {
    let parser = Parser::new(text);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    AttrValue::from(html_output)
}
