/// Input widget used for a draft field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    TextArea,
    /// Coerced with `coerce_number` on every keystroke; the box keeps the raw text
    Number,
    /// `<input type="date">`, value `yyyy-mm-dd`
    Date,
    /// Fixed `(value, label)` options
    Select(Vec<(String, String)>),
    /// Options loaded from a list endpoint (`{ _id, name }` items)
    RemoteSelect { path: &'static str },
}

impl FieldKind {
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            _ => "text",
        }
    }

    /// Inputs the browser reports as `""` while half typed ("12.", "-", a
    /// partial date). Their box is seeded once and never written back from
    /// the draft, so a coerced value cannot wipe what the user is typing.
    pub fn keeps_raw_text(&self) -> bool {
        matches!(self, FieldKind::Number | FieldKind::Date)
    }

    /// Options built from a status enum
    pub fn status_select<S: contracts::enums::status::EntityStatus>() -> Self {
        FieldKind::Select(
            S::all()
                .iter()
                .map(|s| (s.code().to_string(), s.display_name().to_string()))
                .collect(),
        )
    }

    pub fn static_select(options: &[&str]) -> Self {
        FieldKind::Select(
            options
                .iter()
                .map(|o| (o.to_string(), capitalize(o)))
                .collect(),
        )
    }
}

/// One input of a modal form, bound to a field of the draft `D`
pub struct FieldSpec<D> {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Shown only when creating (e.g. passwords)
    pub create_only: bool,
    pub get: fn(&D) -> String,
    pub set: fn(&mut D, String),
}

impl<D> FieldSpec<D> {
    pub fn new(
        name: &'static str,
        label: &'static str,
        kind: FieldKind,
        get: fn(&D) -> String,
        set: fn(&mut D, String),
    ) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            create_only: false,
            get,
            set,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn create_only(mut self) -> Self {
        self.create_only = true;
        self
    }
}

impl<D> Clone for FieldSpec<D> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            label: self.label,
            kind: self.kind.clone(),
            required: self.required,
            create_only: self.create_only,
            get: self.get,
            set: self.set,
        }
    }
}

/// `Number(x) || 0`: unparsable or non-finite input becomes zero
pub fn coerce_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Integer flavour of `coerce_number`, truncating toward zero
pub fn coerce_int(raw: &str) -> i64 {
    coerce_number(raw).trunc() as i64
}

/// Number rendered back into an input without a spurious `.0`
pub fn number_to_input(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Label of the first required field left blank in `draft`
pub fn first_missing<D>(fields: &[FieldSpec<D>], draft: &D, creating: bool) -> Option<&'static str> {
    fields
        .iter()
        .filter(|f| f.required && (creating || !f.create_only))
        .find(|f| (f.get)(draft).trim().is_empty())
        .map(|f| f.label)
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Draft {
        name: String,
        password: String,
        price: f64,
    }

    fn fields() -> Vec<FieldSpec<Draft>> {
        vec![
            FieldSpec::new("name", "Name", FieldKind::Text, |d: &Draft| d.name.clone(), |d, v| d.name = v)
                .required(),
            FieldSpec::new(
                "password",
                "Password",
                FieldKind::Password,
                |d: &Draft| d.password.clone(),
                |d, v| d.password = v,
            )
            .required()
            .create_only(),
            FieldSpec::new(
                "price",
                "Price",
                FieldKind::Number,
                |d| number_to_input(d.price),
                |d, v| d.price = coerce_number(&v),
            ),
        ]
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("42"), 42.0);
        assert_eq!(coerce_number(" 12.5 "), 12.5);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("inf"), 0.0);
        assert_eq!(coerce_int("7.9"), 7);
    }

    #[test]
    fn test_half_typed_inputs_keep_their_text() {
        assert!(FieldKind::Number.keeps_raw_text());
        assert!(FieldKind::Date.keeps_raw_text());
        assert!(!FieldKind::Text.keeps_raw_text());
        assert!(!FieldKind::static_select(&["a"]).keeps_raw_text());

        // "12." arrives as "" first; the draft settles on the finished value
        let fields = fields();
        let mut draft = Draft::default();
        for reported in ["1", "12", "", "12.5"] {
            (fields[2].set)(&mut draft, reported.into());
        }
        assert_eq!(draft.price, 12.5);
    }

    #[test]
    fn test_number_to_input() {
        assert_eq!(number_to_input(50.0), "50");
        assert_eq!(number_to_input(12.5), "12.5");
    }

    #[test]
    fn test_setter_coerces() {
        let fields = fields();
        let mut draft = Draft::default();
        (fields[2].set)(&mut draft, "oops".into());
        assert_eq!(draft.price, 0.0);
        (fields[2].set)(&mut draft, "99.5".into());
        assert_eq!(draft.price, 99.5);
    }

    #[test]
    fn test_first_missing_respects_create_only() {
        let fields = fields();
        let mut draft = Draft {
            name: "Kiran".into(),
            ..Draft::default()
        };
        assert_eq!(first_missing(&fields, &draft, true), Some("Password"));
        assert_eq!(first_missing(&fields, &draft, false), None);
        draft.name.clear();
        assert_eq!(first_missing(&fields, &draft, false), Some("Name"));
    }

    #[test]
    fn test_static_select_labels() {
        assert_eq!(
            FieldKind::static_select(&["faq"]),
            FieldKind::Select(vec![("faq".into(), "Faq".into())])
        );
    }
}
