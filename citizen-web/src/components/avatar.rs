use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AvatarProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Initials from up to the first two name parts, uppercased.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Initials-only avatar; nobody in the sample data has a photo.
#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let mut class = classes!(
        "avatar-initials",
        "rounded-full",
        "bg-primary",
        "text-primary-content",
        "flex",
        "items-center",
        "justify-center"
    );
    class.push(props.class.clone());
    html! {
        <span class={class} aria-hidden="true">{ initials(&props.name) }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::initials;

    #[test]
    fn initials_use_first_two_parts() {
        assert_eq!(initials("Rajesh Kumar"), "RK");
        assert_eq!(initials("Anita Devi Sharma"), "AD");
        assert_eq!(initials("priya"), "P");
        assert_eq!(initials(""), "");
    }
}
