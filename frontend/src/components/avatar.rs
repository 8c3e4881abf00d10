use yew::prelude::*;

/// Up to two uppercase letters: first and last word of the name.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let picks = match words.as_slice() {
        [] => vec![],
        [only] => vec![*only],
        [first, .., last] => vec![*first, *last],
    };
    picks
        .iter()
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Stable hue in [0, 360).
pub fn avatar_hue(name: &str) -> u16 {
    let hash = name
        .chars()
        .fold(0u32, |acc, c| acc.wrapping_mul(31).wrapping_add(c as u32));
    (hash % 360) as u16
}

// A failure only sticks to the source that failed; a new source gets a fresh try.
fn image_source(src: Option<&AttrValue>, failed: Option<&AttrValue>) -> Option<AttrValue> {
    src.filter(|src| Some(*src) != failed).cloned()
}

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub src: Option<AttrValue>,
    #[prop_or(48)]
    pub size: u32,
}

#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let failed = use_state(|| None::<AttrValue>);
    let dimension = format!("width: {0}px; height: {0}px;", props.size);

    match image_source(props.src.as_ref(), (*failed).as_ref()) {
        Some(src) => {
            let onerror = {
                let failed = failed.clone();
                let name = props.name.clone();
                let src = src.clone();
                Callback::from(move |_: Event| {
                    log::warn!("Avatar image for {} failed to load, using initials", name);
                    failed.set(Some(src.clone()));
                })
            };
            html! {
                <img class="avatar" src={src} alt={props.name.clone()} style={dimension} onerror={onerror} />
            }
        }
        None => {
            let style = format!(
                "{} background: hsl({}, 55%, 45%); font-size: {}px;",
                dimension,
                avatar_hue(&props.name),
                props.size * 2 / 5
            );
            html! {
                <span class="avatar avatar--initials" role="img" aria-label={props.name.clone()} style={style}>
                    { initials(&props.name) }
                </span>
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_and_last_word() {
        assert_eq!(initials("Alex Chen"), "AC");
        assert_eq!(initials("Maria de la Cruz"), "MC");
        assert_eq!(initials("  priya  "), "P");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn failed_image_only_blocks_its_own_source() {
        let first = AttrValue::Static("/assets/team/alex-chen.webp");
        let second = AttrValue::Static("/assets/team/priya-raman.webp");

        assert_eq!(image_source(Some(&first), None), Some(first.clone()));
        assert_eq!(image_source(Some(&first), Some(&first)), None);
        assert_eq!(image_source(Some(&second), Some(&first)), Some(second.clone()));
        assert_eq!(image_source(None, Some(&first)), None);
    }

    #[test]
    fn hue_is_stable_and_in_range() {
        assert_eq!(avatar_hue("Alex Chen"), avatar_hue("Alex Chen"));
        for name in ["", "a", "Sofia Alvarez", "Zhang Wei"] {
            assert!(avatar_hue(name) < 360);
        }
    }
}
