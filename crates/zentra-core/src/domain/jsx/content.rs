//! Inner JSX content for each component.

use crate::domain::component::{
    Accordion, Alert, Checkbox, Collapsible, Component, DropdownMenu, InputOtp, MenuType,
    Pagination, RadioGroup, Select, Tooltip, item_value,
};
use crate::domain::jsx::attributes::{alt_attr, src_attr, str_attr, text_content};
use crate::domain::naming::kebab_to_pascal;

/// Lucide component name for a kebab-case icon name.
pub fn icon_name(icon: &str) -> String {
    kebab_to_pascal(icon)
}

/// Lines rendered between the component's opening and closing tags.
///
/// An empty result means the element is self-closing.
pub fn component_content(component: &Component) -> Vec<String> {
    match component {
        Component::Accordion(a) => accordion(a),
        Component::Alert(a) => alert(a),
        Component::AspectRatio(a) => vec![format!(
            "<Image {} {} fill className=\"rounded-md object-cover\" />",
            src_attr(&a.src),
            alt_attr(&a.alt)
        )],
        Component::Avatar(a) => vec![
            format!("<AvatarImage {} {} />", src_attr(&a.src), alt_attr(&a.alt)),
            format!("<AvatarFallback>{}</AvatarFallback>", text_content(&a.fallback_text)),
        ],
        Component::Badge(b) => vec![text_content(&b.text)],
        Component::Button(b) => {
            let mut inner = Vec::new();
            if let Some(icon) = &b.icon {
                inner.push(format!("<{} className=\"mr-2 h-4 w-4\" />", icon_name(icon)));
            }
            inner.push(text_content(&b.text));
            match &b.url {
                Some(url) => {
                    let mut lines = vec![format!("<Link {}>", str_attr("href", url))];
                    lines.extend(inner);
                    lines.push("</Link>".to_string());
                    lines
                }
                None => inner,
            }
        }
        Component::Collapsible(c) => collapsible(c),
        Component::DropdownMenu(d) => dropdown_menu(d, component),
        Component::InputOtp(o) => input_otp(o),
        Component::Label(l) => vec![text_content(&l.text)],
        Component::Pagination(p) => pagination(p, component),
        Component::RadioGroup(r) => radio_group(r),
        Component::Select(s) => select(s),
        Component::Toggle(t) => vec![text_content(&t.text)],
        Component::Tooltip(t) => tooltip(t),
        Component::Calendar(_)
        | Component::Checkbox(_)
        | Component::FileUpload(_)
        | Component::Input(_)
        | Component::Progress(_)
        | Component::Separator(_)
        | Component::Slider(_)
        | Component::Switch(_)
        | Component::Textarea(_) => Vec::new(),
    }
}

/// Elements rendered next to the component inside its wrapper.
pub fn sibling_content(component: &Component) -> Vec<String> {
    match component {
        Component::Checkbox(c) => checkbox_label(c),
        _ => Vec::new(),
    }
}

fn accordion(accordion: &Accordion) -> Vec<String> {
    let mut lines = Vec::new();
    for (idx, item) in accordion.items.iter().enumerate() {
        let disabled = if item.disabled { " disabled" } else { "" };
        lines.push(format!("<AccordionItem value=\"item-{}\"{disabled}>", idx + 1));
        lines.push(format!(
            "<AccordionTrigger>{}</AccordionTrigger>",
            text_content(&item.title)
        ));
        lines.push(format!(
            "<AccordionContent>{}</AccordionContent>",
            text_content(&item.content)
        ));
        lines.push("</AccordionItem>".to_string());
    }
    lines
}

fn alert(alert: &Alert) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(icon) = &alert.icon {
        lines.push(format!("<{} className=\"h-4 w-4\" />", icon_name(icon)));
    }
    lines.push(format!("<AlertTitle>{}</AlertTitle>", text_content(&alert.title)));
    lines.push(format!(
        "<AlertDescription>{}</AlertDescription>",
        text_content(&alert.description)
    ));
    lines
}

fn checkbox_label(checkbox: &Checkbox) -> Vec<String> {
    let mut lines = vec![
        "<div className=\"grid gap-1.5 leading-none\">".to_string(),
        format!(
            "<Label htmlFor=\"{}\" className=\"text-sm font-medium leading-none peer-disabled:cursor-not-allowed peer-disabled:opacity-70\">{}</Label>",
            checkbox.id,
            text_content(&checkbox.label)
        ),
    ];
    if let Some(text) = &checkbox.text {
        lines.push(format!(
            "<p className=\"text-sm text-muted-foreground\">{}</p>",
            text_content(text)
        ));
    }
    lines.push("</div>".to_string());
    lines
}

fn collapsible(collapsible: &Collapsible) -> Vec<String> {
    let item = |text: &str| {
        format!(
            "<div className=\"rounded-md border px-4 py-3 font-mono text-sm\">{}</div>",
            text_content(text)
        )
    };

    let mut lines = vec![
        "<div className=\"flex items-center justify-between space-x-4 px-4\">".to_string(),
        format!(
            "<h4 className=\"text-sm font-semibold\">{}</h4>",
            text_content(&collapsible.title)
        ),
        "<CollapsibleTrigger asChild>".to_string(),
        "<Button variant=\"ghost\" size=\"sm\" className=\"w-9 p-0\">".to_string(),
        "<ChevronsUpDown className=\"h-4 w-4\" />".to_string(),
        "<span className=\"sr-only\">Toggle</span>".to_string(),
        "</Button>".to_string(),
        "</CollapsibleTrigger>".to_string(),
        "</div>".to_string(),
    ];

    let mut items = collapsible.items.iter();
    if let Some(first) = items.next() {
        lines.push(item(first.as_str()));
    }
    let rest: Vec<String> = items.map(|text| item(text.as_str())).collect();
    if !rest.is_empty() {
        lines.push("<CollapsibleContent className=\"space-y-2\">".to_string());
        lines.extend(rest);
        lines.push("</CollapsibleContent>".to_string());
    }
    lines
}

fn dropdown_menu(menu: &DropdownMenu, component: &Component) -> Vec<String> {
    let mut lines = vec![
        format!(
            "<DropdownMenuTrigger>{}</DropdownMenuTrigger>",
            text_content(&menu.trigger)
        ),
        "<DropdownMenuContent className=\"w-56\">".to_string(),
    ];
    if let Some(label) = &menu.label {
        lines.push(format!(
            "<DropdownMenuLabel>{}</DropdownMenuLabel>",
            text_content(label)
        ));
        lines.push("<DropdownMenuSeparator />".to_string());
    }

    let states = component.state_names();
    match menu.kind {
        MenuType::Default => {
            lines.push("<DropdownMenuGroup>".to_string());
            lines.extend(menu.items.iter().map(|item| {
                format!("<DropdownMenuItem>{}</DropdownMenuItem>", text_content(item))
            }));
            lines.push("</DropdownMenuGroup>".to_string());
        }
        MenuType::Checkbox => {
            lines.extend(menu.items.iter().zip(&states).map(|(item, state)| {
                format!(
                    "<DropdownMenuCheckboxItem checked={{{}}} onCheckedChange={{{}}}>{}</DropdownMenuCheckboxItem>",
                    state.getter,
                    state.setter,
                    text_content(item)
                )
            }));
        }
        MenuType::Radio => {
            if let Some(state) = states.first() {
                lines.push(format!(
                    "<DropdownMenuRadioGroup value={{{}}} onValueChange={{{}}}>",
                    state.getter, state.setter
                ));
                lines.extend(menu.items.iter().map(|item| {
                    format!(
                        "<DropdownMenuRadioItem value=\"{}\">{}</DropdownMenuRadioItem>",
                        item_value(item),
                        text_content(item)
                    )
                }));
                lines.push("</DropdownMenuRadioGroup>".to_string());
            }
        }
    }

    lines.push("</DropdownMenuContent>".to_string());
    lines
}

fn input_otp(otp: &InputOtp) -> Vec<String> {
    let groups = otp.num_groups.max(1);
    let group_size = otp.num_inputs / groups;
    let mut lines = Vec::new();
    let mut slot = 0;

    for group in 0..groups {
        if group > 0 {
            lines.push("<InputOTPSeparator />".to_string());
        }
        lines.push("<InputOTPGroup>".to_string());
        for _ in 0..group_size {
            lines.push(format!("<InputOTPSlot index={{{slot}}} />"));
            slot += 1;
        }
        lines.push("</InputOTPGroup>".to_string());
    }
    lines
}

fn pagination(pagination: &Pagination, component: &Component) -> Vec<String> {
    let states = component.state_names();
    let (Some(start), Some(end)) = (states.first(), states.get(1)) else {
        return Vec::new();
    };
    let per_page = format!("{}ItemsPerPage", pagination.name);
    let max_items = format!("{}MaxItems", pagination.name);

    let on_click = |symbol: char| {
        format!(
            "onClick={{() => {{ {}({} {symbol} {per_page}); {}({} {symbol} {per_page}); }}}}",
            start.setter, start.getter, end.setter, end.getter
        )
    };
    let disabled_when = |getter: &str, limit: &str| {
        format!(
            "className={{{getter} === {limit} ? \"pointer-events-none opacity-50\" : undefined}}"
        )
    };
    let item = |inner: String| {
        vec![
            "<PaginationItem>".to_string(),
            inner,
            "</PaginationItem>".to_string(),
        ]
    };

    let mut lines = vec!["<PaginationContent>".to_string()];
    lines.extend(item(format!(
        "<PaginationPrevious {} {} />",
        disabled_when(&start.getter, "0"),
        on_click('-')
    )));
    for (idx, link) in pagination.links.iter().enumerate() {
        let active = if idx == 0 { " isActive" } else { "" };
        lines.extend(item(format!(
            "<PaginationLink href=\"{link}\"{active}>{}</PaginationLink>",
            idx + 1
        )));
    }
    if pagination.ellipsis {
        lines.extend(item("<PaginationEllipsis />".to_string()));
    }
    lines.extend(item(format!(
        "<PaginationNext {} {} />",
        disabled_when(&end.getter, &max_items),
        on_click('+')
    )));
    lines.push("</PaginationContent>".to_string());
    lines
}

fn radio_group(group: &RadioGroup) -> Vec<String> {
    group
        .items
        .iter()
        .flat_map(|item| {
            [
                "<div className=\"flex items-center space-x-2\">".to_string(),
                format!(
                    "<RadioGroupItem value=\"{}\" id=\"{}\" />",
                    item.value, item.id
                ),
                format!(
                    "<Label htmlFor=\"{}\">{}</Label>",
                    item.id,
                    text_content(&item.text)
                ),
                "</div>".to_string(),
            ]
        })
        .collect()
}

fn select(select: &Select) -> Vec<String> {
    let mut lines = vec![
        "<SelectTrigger className=\"w-[180px]\">".to_string(),
        format!("<SelectValue placeholder=\"{}\" />", select.display_text),
        "</SelectTrigger>".to_string(),
        "<SelectContent>".to_string(),
    ];
    for group in &select.groups {
        lines.push("<SelectGroup>".to_string());
        if let Some(label) = &group.label {
            lines.push(format!("<SelectLabel>{}</SelectLabel>", text_content(label)));
        }
        lines.extend(group.items.iter().map(|item| {
            format!(
                "<SelectItem value=\"{}\">{}</SelectItem>",
                item_value(item),
                text_content(item)
            )
        }));
        lines.push("</SelectGroup>".to_string());
    }
    lines.push("</SelectContent>".to_string());
    lines
}

fn tooltip(tooltip: &Tooltip) -> Vec<String> {
    let trigger = text_content(&tooltip.trigger);
    let trigger_lines = if tooltip.trigger_button {
        vec![
            "<TooltipTrigger asChild>".to_string(),
            format!("<Button variant=\"outline\">{trigger}</Button>"),
            "</TooltipTrigger>".to_string(),
        ]
    } else {
        vec![format!("<TooltipTrigger>{trigger}</TooltipTrigger>")]
    };

    let mut lines = vec!["<Tooltip>".to_string()];
    lines.extend(trigger_lines);
    lines.push("<TooltipContent>".to_string());
    lines.push(format!("<p>{}</p>", text_content(&tooltip.text)));
    lines.push("</TooltipContent>".to_string());
    lines.push("</Tooltip>".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::component::{AccordionItem, AccordionType, Orientation};

    fn parse(source: &str) -> Component {
        toml::from_str(source).expect("component should parse")
    }

    #[test]
    fn accordion_items_are_numbered() {
        let accordion = Component::Accordion(Accordion {
            items: vec![
                AccordionItem {
                    title: "One".into(),
                    content: "First".into(),
                    disabled: false,
                },
                AccordionItem {
                    title: "Two".into(),
                    content: "Second".into(),
                    disabled: true,
                },
            ],
            kind: AccordionType::Single,
            orientation: Orientation::Vertical,
        });
        let lines = component_content(&accordion);
        assert_eq!(lines[0], "<AccordionItem value=\"item-1\">");
        assert_eq!(lines[4], "<AccordionItem value=\"item-2\" disabled>");
    }

    #[test]
    fn otp_groups_split_slots() {
        let otp = parse("type = \"InputOTP\"\nnum_inputs = 4\nnum_groups = 2");
        let lines = component_content(&otp);
        assert_eq!(
            lines,
            vec![
                "<InputOTPGroup>",
                "<InputOTPSlot index={0} />",
                "<InputOTPSlot index={1} />",
                "</InputOTPGroup>",
                "<InputOTPSeparator />",
                "<InputOTPGroup>",
                "<InputOTPSlot index={2} />",
                "<InputOTPSlot index={3} />",
                "</InputOTPGroup>",
            ]
        );
    }

    #[test]
    fn pagination_marks_first_link_active() {
        let pagination = parse(
            "type = \"Pagination\"\nname = \"posts\"\ntotal_items = 30\nlinks = [\"#\", \"#\"]\nellipsis = true",
        );
        let lines = component_content(&pagination);
        assert!(lines.contains(&"<PaginationLink href=\"#\" isActive>1</PaginationLink>".to_string()));
        assert!(lines.contains(&"<PaginationLink href=\"#\">2</PaginationLink>".to_string()));
        assert!(lines.contains(&"<PaginationEllipsis />".to_string()));
        assert!(lines.iter().any(|l| l.contains("postsEndIdx === postsMaxItems")));
        assert!(lines.iter().any(|l| l.contains(
            "postsSetStartIdx(postsStartIdx + postsItemsPerPage)"
        )));
    }

    #[test]
    fn text_params_become_expressions() {
        let badge = parse("type = \"Badge\"\ntext = \"Hi $user\"");
        assert_eq!(component_content(&badge), vec!["Hi {user}"]);
    }

    #[test]
    fn checkbox_description_is_optional() {
        let checkbox = parse("type = \"Checkbox\"\nid = \"terms\"\nlabel = \"Accept\"");
        assert!(component_content(&checkbox).is_empty());
        let siblings = sibling_content(&checkbox);
        assert_eq!(siblings.len(), 3);
        assert!(siblings[1].contains("htmlFor=\"terms\""));
    }

    #[test]
    fn radio_menu_uses_position_state() {
        let menu = parse(
            "type = \"DropdownMenu\"\nname = \"panel\"\ntrigger = \"Open\"\nkind = \"radio\"\nitems = [\"Top\", \"Bottom\"]",
        );
        let lines = component_content(&menu);
        assert!(lines.contains(
            &"<DropdownMenuRadioGroup value={panelPosition} onValueChange={panelSetPosition}>"
                .to_string()
        ));
        assert!(lines.contains(
            &"<DropdownMenuRadioItem value=\"top\">Top</DropdownMenuRadioItem>".to_string()
        ));
    }

    #[test]
    fn button_with_url_wraps_link() {
        let button = parse("type = \"Button\"\ntext = \"Docs\"\nurl = \"/docs\"\nicon = \"book-open\"");
        assert_eq!(
            component_content(&button),
            vec![
                "<Link href=\"/docs\">",
                "<BookOpen className=\"mr-2 h-4 w-4\" />",
                "Docs",
                "</Link>",
            ]
        );
    }
}
