//! HTML rendering for the `/items` pages.

use crate::domain::Item;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n",
        title = escape_html(title),
        body = body,
    )
}

pub fn items_list(items: &[Item]) -> String {
    let mut body = String::from("<p><a href=\"/items/create\">Create item</a></p>\n");

    if items.is_empty() {
        body.push_str("<p>No items yet.</p>");
        return layout("Items", &body);
    }

    body.push_str("<table>\n<tr><th>ID</th><th>Name</th><th>Notes</th><th></th></tr>\n");
    for item in items {
        body.push_str(&format!(
            "<tr><td>{id}</td><td>{name}</td><td>{notes}</td><td><a href=\"/items/update/{id}\">Edit</a> <a href=\"/items/delete/{id}\">Delete</a></td></tr>\n",
            id = item.id,
            name = escape_html(&item.name),
            notes = escape_html(&item.notes),
        ));
    }
    body.push_str("</table>");

    layout("Items", &body)
}

fn item_form(action: &str, name: &str, notes: &str, submit: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\n<label>Name <input type=\"text\" name=\"name\" value=\"{name}\" required></label>\n<label>Notes <textarea name=\"notes\">{notes}</textarea></label>\n<button type=\"submit\">{submit}</button>\n</form>\n<p><a href=\"/items\">Back to list</a></p>",
        action = action,
        name = escape_html(name),
        notes = escape_html(notes),
        submit = submit,
    )
}

pub fn create_form() -> String {
    layout("Create item", &item_form("/items/create", "", "", "Create"))
}

pub fn update_form(item: &Item) -> String {
    let action = format!("/items/update/{}", item.id);
    layout(
        "Update item",
        &item_form(&action, &item.name, &item.notes, "Save"),
    )
}
