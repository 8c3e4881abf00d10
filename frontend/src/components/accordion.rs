use yew::prelude::*;

/// In single mode opening one panel closes the rest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Vec<usize>,
    allow_multiple: bool,
}

impl AccordionState {
    pub fn new(allow_multiple: bool) -> Self {
        Self {
            open: Vec::new(),
            allow_multiple,
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    pub fn toggle(&mut self, index: usize) {
        if self.is_open(index) {
            self.open.retain(|i| *i != index);
        } else if self.allow_multiple {
            self.open.push(index);
        } else {
            self.open = vec![index];
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct AccordionItem {
    pub question: AttrValue,
    pub answer: Html,
}

impl AccordionItem {
    pub fn text(question: &'static str, answer: &'static str) -> Self {
        Self {
            question: AttrValue::Static(question),
            answer: html! { <p>{ answer }</p> },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    pub items: Vec<AccordionItem>,
    #[prop_or_default]
    pub allow_multiple: bool,
}

#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let state = use_state(|| AccordionState::new(props.allow_multiple));

    html! {
        <div class="accordion">
            { for props.items.iter().enumerate().map(|(index, item)| {
                let is_open = state.is_open(index);
                let toggle = {
                    let state = state.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        let mut next = (*state).clone();
                        next.toggle(index);
                        state.set(next);
                    })
                };
                html! {
                    <div key={index} class={classes!("accordion__item", is_open.then(|| "open"))}>
                        <button class="accordion__question" aria-expanded={is_open.to_string()} onclick={toggle}>
                            <span>{ item.question.clone() }</span>
                            <span class="accordion__icon">{ if is_open { "−" } else { "+" } }</span>
                        </button>
                        if is_open {
                            <div class="accordion__answer">{ item.answer.clone() }</div>
                        }
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::AccordionState;

    #[test]
    fn single_mode_keeps_one_panel_open() {
        let mut state = AccordionState::new(false);
        state.toggle(0);
        state.toggle(2);
        assert!(!state.is_open(0));
        assert!(state.is_open(2));

        state.toggle(2);
        assert!(!state.is_open(2));
    }

    #[test]
    fn multi_mode_opens_independently() {
        let mut state = AccordionState::new(true);
        state.toggle(0);
        state.toggle(1);
        assert!(state.is_open(0) && state.is_open(1));

        state.toggle(0);
        assert!(!state.is_open(0));
        assert!(state.is_open(1));
    }
}
