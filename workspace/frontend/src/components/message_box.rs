use common::{Message, Tone};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MessageBoxProps {
    pub message: Message,
}

#[function_component(MessageBox)]
pub fn message_box(props: &MessageBoxProps) -> Html {
    let (text_class, icon) = match props.message.tone {
        Tone::Info => ("text-gray-700", "fas fa-info-circle"),
        Tone::Alert => {
            log::warn!("Displaying error to user: {}", props.message.text);
            ("text-red-600", "fas fa-exclamation-circle")
        }
    };

    html! {
        <div
            id="message-box"
            class={classes!("flex", "flex-col", "items-center", "justify-center", "py-12", "gap-3", "text-center", text_class)}
        >
            <i class={classes!(icon, "text-3xl", "opacity-70")}></i>
            <span class="text-lg">{&props.message.text}</span>
        </div>
    }
}
