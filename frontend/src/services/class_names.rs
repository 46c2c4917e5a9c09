//! Conditional class-list composition with Tailwind conflict resolution.
//!
//! `cn!` collects its fragments into a `yew::Classes` (anything `Into<Classes>`:
//! strings, `Option`s such as `cond.then_some("class")`, `Vec`s and arrays),
//! then drops every class that a later class of the same utility group
//! overrides:
//!
//! ```ignore
//! cn!("px-2 text-sm", has_error.then_some("text-red-500"), "p-4") // "text-sm text-red-500 p-4"
//! ```

use std::collections::HashSet;

/// Merge class fragments into one class string, later conflicting classes winning
macro_rules! cn {
    ($($fragment:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut classes = ::yew::html::Classes::new();
        $(
            classes.push($fragment);
        )*
        $crate::services::class_names::merge_classes(&classes)
    }};
}

pub(crate) use cn;

/// Resolve conflicts in an ordered list of class tokens.
///
/// Walks the tokens from last to first; a token survives unless a later
/// token with the same variant already claimed its group. Unknown classes
/// only collapse with exact duplicates. The relative order of survivors is
/// preserved.
pub fn merge_classes<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens: Vec<S> = tokens.into_iter().collect();
    let words: Vec<&str> = tokens
        .iter()
        .flat_map(|token| token.as_ref().split_whitespace())
        .collect();

    let mut claimed: HashSet<ConflictKey<'_>> = HashSet::new();
    let mut kept: Vec<&str> = Vec::with_capacity(words.len());

    for &word in words.iter().rev() {
        let parsed = ParsedClass::parse(word);
        match parsed.group {
            Some(group) => {
                let key = ConflictKey::Group(parsed.variant.clone(), group);
                if claimed.contains(&key) {
                    continue;
                }
                claimed.insert(key);
                for &covered in group.covers() {
                    claimed.insert(ConflictKey::Group(parsed.variant.clone(), covered));
                }
            }
            None => {
                if !claimed.insert(ConflictKey::Exact(word)) {
                    continue;
                }
            }
        }
        kept.push(word);
    }

    kept.reverse();
    kept.join(" ")
}

#[derive(Debug, PartialEq, Eq, Hash)]
enum ConflictKey<'a> {
    Group(String, ClassGroup),
    Exact(&'a str),
}

/// A class split into its variant scope and utility group
struct ParsedClass {
    /// Sorted modifiers joined with `:`, suffixed with `!` when important
    variant: String,
    group: Option<ClassGroup>,
}

impl ParsedClass {
    fn parse(class: &str) -> Self {
        let mut modifiers = Vec::new();
        let mut depth = 0usize;
        let mut start = 0;

        for (index, ch) in class.char_indices() {
            match ch {
                '[' | '(' => depth += 1,
                ']' | ')' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => {
                    modifiers.push(&class[start..index]);
                    start = index + 1;
                }
                _ => {}
            }
        }

        let mut base = &class[start..];
        let mut important = false;
        if let Some(rest) = base.strip_prefix('!') {
            base = rest;
            important = true;
        } else if let Some(rest) = base.strip_suffix('!') {
            base = rest;
            important = true;
        }

        modifiers.sort_unstable();
        let mut variant = modifiers.join(":");
        if important {
            variant.push('!');
        }

        Self {
            variant,
            group: class_group(base),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ClassGroup {
    Display,
    Position,
    Visibility,
    Padding,
    PaddingX,
    PaddingY,
    PaddingT,
    PaddingR,
    PaddingB,
    PaddingL,
    PaddingS,
    PaddingE,
    Margin,
    MarginX,
    MarginY,
    MarginT,
    MarginR,
    MarginB,
    MarginL,
    MarginS,
    MarginE,
    Inset,
    InsetX,
    InsetY,
    Top,
    Right,
    Bottom,
    Left,
    Gap,
    GapX,
    GapY,
    Width,
    Height,
    Size,
    MinWidth,
    MaxWidth,
    MinHeight,
    MaxHeight,
    FontSize,
    FontWeight,
    FontFamily,
    LineHeight,
    Tracking,
    TextAlign,
    TextColor,
    TextWrap,
    TextOverflow,
    BgColor,
    BgSize,
    BorderWidth,
    BorderWidthX,
    BorderWidthY,
    BorderWidthT,
    BorderWidthR,
    BorderWidthB,
    BorderWidthL,
    BorderStyle,
    BorderColor,
    Rounded,
    RoundedT,
    RoundedR,
    RoundedB,
    RoundedL,
    RoundedTl,
    RoundedTr,
    RoundedBr,
    RoundedBl,
    FlexDirection,
    FlexWrap,
    Flex,
    Grow,
    Shrink,
    AlignItems,
    AlignSelf,
    AlignContent,
    JustifyContent,
    JustifyItems,
    JustifySelf,
    Opacity,
    Shadow,
    ShadowColor,
    ZIndex,
    Overflow,
    OverflowX,
    OverflowY,
    Cursor,
    Whitespace,
}

impl ClassGroup {
    /// Groups a class of this group also sets, and therefore overrides
    fn covers(self) -> &'static [ClassGroup] {
        use ClassGroup::*;
        match self {
            Padding => &[PaddingX, PaddingY, PaddingT, PaddingR, PaddingB, PaddingL, PaddingS, PaddingE],
            PaddingX => &[PaddingR, PaddingL],
            PaddingY => &[PaddingT, PaddingB],
            Margin => &[MarginX, MarginY, MarginT, MarginR, MarginB, MarginL, MarginS, MarginE],
            MarginX => &[MarginR, MarginL],
            MarginY => &[MarginT, MarginB],
            Inset => &[InsetX, InsetY, Top, Right, Bottom, Left],
            InsetX => &[Right, Left],
            InsetY => &[Top, Bottom],
            Gap => &[GapX, GapY],
            Size => &[Width, Height],
            FontSize => &[LineHeight],
            BorderWidth => &[BorderWidthX, BorderWidthY, BorderWidthT, BorderWidthR, BorderWidthB, BorderWidthL],
            BorderWidthX => &[BorderWidthR, BorderWidthL],
            BorderWidthY => &[BorderWidthT, BorderWidthB],
            Rounded => &[RoundedT, RoundedR, RoundedB, RoundedL, RoundedTl, RoundedTr, RoundedBr, RoundedBl],
            RoundedT => &[RoundedTl, RoundedTr],
            RoundedR => &[RoundedTr, RoundedBr],
            RoundedB => &[RoundedBr, RoundedBl],
            RoundedL => &[RoundedTl, RoundedBl],
            Overflow => &[OverflowX, OverflowY],
            _ => &[],
        }
    }
}

// More specific prefixes first: `gap-x-2` must not be read as `gap-` + `x-2`
const PREFIX_GROUPS: &[(&str, ClassGroup)] = &[
    ("p", ClassGroup::Padding),
    ("px", ClassGroup::PaddingX),
    ("py", ClassGroup::PaddingY),
    ("pt", ClassGroup::PaddingT),
    ("pr", ClassGroup::PaddingR),
    ("pb", ClassGroup::PaddingB),
    ("pl", ClassGroup::PaddingL),
    ("ps", ClassGroup::PaddingS),
    ("pe", ClassGroup::PaddingE),
    ("m", ClassGroup::Margin),
    ("mx", ClassGroup::MarginX),
    ("my", ClassGroup::MarginY),
    ("mt", ClassGroup::MarginT),
    ("mr", ClassGroup::MarginR),
    ("mb", ClassGroup::MarginB),
    ("ml", ClassGroup::MarginL),
    ("ms", ClassGroup::MarginS),
    ("me", ClassGroup::MarginE),
    ("inset-x", ClassGroup::InsetX),
    ("inset-y", ClassGroup::InsetY),
    ("inset", ClassGroup::Inset),
    ("top", ClassGroup::Top),
    ("right", ClassGroup::Right),
    ("bottom", ClassGroup::Bottom),
    ("left", ClassGroup::Left),
    ("gap-x", ClassGroup::GapX),
    ("gap-y", ClassGroup::GapY),
    ("gap", ClassGroup::Gap),
    ("min-w", ClassGroup::MinWidth),
    ("max-w", ClassGroup::MaxWidth),
    ("min-h", ClassGroup::MinHeight),
    ("max-h", ClassGroup::MaxHeight),
    ("w", ClassGroup::Width),
    ("h", ClassGroup::Height),
    ("size", ClassGroup::Size),
    ("leading", ClassGroup::LineHeight),
    ("tracking", ClassGroup::Tracking),
    ("grow", ClassGroup::Grow),
    ("shrink", ClassGroup::Shrink),
    ("items", ClassGroup::AlignItems),
    ("self", ClassGroup::AlignSelf),
    ("content", ClassGroup::AlignContent),
    ("justify-items", ClassGroup::JustifyItems),
    ("justify-self", ClassGroup::JustifySelf),
    ("justify", ClassGroup::JustifyContent),
    ("opacity", ClassGroup::Opacity),
    ("z", ClassGroup::ZIndex),
    ("overflow-x", ClassGroup::OverflowX),
    ("overflow-y", ClassGroup::OverflowY),
    ("overflow", ClassGroup::Overflow),
    ("cursor", ClassGroup::Cursor),
    ("whitespace", ClassGroup::Whitespace),
];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];
const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];
const BORDER_SIDES: &[(&str, ClassGroup)] = &[
    ("x", ClassGroup::BorderWidthX),
    ("y", ClassGroup::BorderWidthY),
    ("t", ClassGroup::BorderWidthT),
    ("r", ClassGroup::BorderWidthR),
    ("b", ClassGroup::BorderWidthB),
    ("l", ClassGroup::BorderWidthL),
];
// Corners before sides so `tl` is not read as `t` + `l`
const ROUNDED_SIDES: &[(&str, ClassGroup)] = &[
    ("tl", ClassGroup::RoundedTl),
    ("tr", ClassGroup::RoundedTr),
    ("br", ClassGroup::RoundedBr),
    ("bl", ClassGroup::RoundedBl),
    ("t", ClassGroup::RoundedT),
    ("r", ClassGroup::RoundedR),
    ("b", ClassGroup::RoundedB),
    ("l", ClassGroup::RoundedL),
];

fn class_group(class: &str) -> Option<ClassGroup> {
    let class = class.strip_prefix('-').unwrap_or(class);
    let class = strip_postfix(class);

    if let Some(group) = keyword_group(class) {
        return Some(group);
    }

    for &(prefix, group) in PREFIX_GROUPS {
        if let Some(value) = utility_value(class, prefix) {
            if !value.is_empty() {
                return Some(group);
            }
        }
    }

    if let Some(value) = utility_value(class, "text") {
        return Some(text_group(value));
    }
    if let Some(value) = utility_value(class, "font") {
        return Some(font_group(value));
    }
    if let Some(value) = utility_value(class, "bg") {
        return Some(match value {
            "auto" | "cover" | "contain" => ClassGroup::BgSize,
            _ => ClassGroup::BgColor,
        });
    }
    if let Some(value) = utility_value(class, "border") {
        return border_group(value);
    }
    if let Some(value) = utility_value(class, "rounded") {
        return Some(rounded_group(value));
    }
    if let Some(value) = utility_value(class, "shadow") {
        return Some(if SHADOW_SIZES.contains(&value) {
            ClassGroup::Shadow
        } else {
            ClassGroup::ShadowColor
        });
    }
    if utility_value(class, "flex").is_some() {
        return Some(ClassGroup::Flex);
    }

    None
}

fn keyword_group(class: &str) -> Option<ClassGroup> {
    let group = match class {
        "block" | "inline-block" | "inline" | "flex" | "inline-flex" | "grid" | "inline-grid"
        | "table" | "contents" | "flow-root" | "hidden" => ClassGroup::Display,
        "static" | "fixed" | "absolute" | "relative" | "sticky" => ClassGroup::Position,
        "visible" | "invisible" | "collapse" => ClassGroup::Visibility,
        "flex-row" | "flex-row-reverse" | "flex-col" | "flex-col-reverse" => ClassGroup::FlexDirection,
        "flex-wrap" | "flex-wrap-reverse" | "flex-nowrap" => ClassGroup::FlexWrap,
        "grow" => ClassGroup::Grow,
        "shrink" => ClassGroup::Shrink,
        "border" => ClassGroup::BorderWidth,
        "border-solid" | "border-dashed" | "border-dotted" | "border-double" | "border-hidden"
        | "border-none" => ClassGroup::BorderStyle,
        "rounded" => ClassGroup::Rounded,
        "shadow" => ClassGroup::Shadow,
        "truncate" | "text-ellipsis" | "text-clip" => ClassGroup::TextOverflow,
        _ => return None,
    };
    Some(group)
}

fn text_group(value: &str) -> ClassGroup {
    if FONT_SIZES.contains(&value) || is_arbitrary_length(value) {
        ClassGroup::FontSize
    } else if TEXT_ALIGNS.contains(&value) {
        ClassGroup::TextAlign
    } else if matches!(value, "wrap" | "nowrap" | "balance" | "pretty") {
        ClassGroup::TextWrap
    } else {
        ClassGroup::TextColor
    }
}

fn font_group(value: &str) -> ClassGroup {
    if FONT_WEIGHTS.contains(&value) || is_arbitrary_length(value) {
        ClassGroup::FontWeight
    } else {
        ClassGroup::FontFamily
    }
}

fn border_group(value: &str) -> Option<ClassGroup> {
    for &(side, group) in BORDER_SIDES {
        if value == side {
            return Some(group);
        }
        if let Some(width) = utility_value(value, side) {
            // Side colors (`border-t-red-500`) are left unresolved
            return is_length(width).then_some(group);
        }
    }

    if is_length(value) {
        Some(ClassGroup::BorderWidth)
    } else {
        Some(ClassGroup::BorderColor)
    }
}

fn rounded_group(value: &str) -> ClassGroup {
    for &(side, group) in ROUNDED_SIDES {
        if value == side || utility_value(value, side).is_some() {
            return group;
        }
    }
    ClassGroup::Rounded
}

/// `value` of `prefix-value`, if `class` has that shape
fn utility_value<'a>(class: &'a str, prefix: &str) -> Option<&'a str> {
    class.strip_prefix(prefix)?.strip_prefix('-')
}

/// Drop an opacity or line-height postfix (`bg-black/50`, `text-sm/6`)
fn strip_postfix(class: &str) -> &str {
    let mut depth = 0usize;
    for (index, ch) in class.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            '/' if depth == 0 => return &class[..index],
            _ => {}
        }
    }
    class
}

fn is_length(value: &str) -> bool {
    (!value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit()))
        || value == "px"
        || is_arbitrary_length(value)
}

fn is_arbitrary_length(value: &str) -> bool {
    value
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .map(|inner| {
            inner.starts_with("length:")
                || inner.chars().next().is_some_and(|ch| ch.is_ascii_digit() || ch == '.')
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falsy_fragments_are_skipped() {
        assert_eq!(cn!("a", false.then_some("hidden"), "b", None::<&str>, "c"), "a b c");
    }

    #[test]
    fn test_later_conflicting_utility_wins() {
        assert_eq!(cn!("p-2", "p-4"), "p-4");
        assert_eq!(cn!("bg-red-500", "bg-blue-500"), "bg-blue-500");
        assert_eq!(cn!("flex", "hidden"), "hidden");
    }

    #[test]
    fn test_shorthand_covers_axes_but_not_the_reverse() {
        assert_eq!(cn!("px-2 pt-1", "p-4"), "p-4");
        assert_eq!(cn!("p-4", "px-2"), "p-4 px-2");
        assert_eq!(cn!("pr-2", "px-4"), "px-4");
        assert_eq!(cn!("w-4 h-4", "size-6"), "size-6");
        assert_eq!(cn!("leading-6", "text-sm"), "text-sm");
        assert_eq!(cn!("rounded-t-lg", "rounded-md"), "rounded-md");
        assert_eq!(cn!("rounded-md", "rounded-tl-none"), "rounded-md rounded-tl-none");
    }

    #[test]
    fn test_text_size_color_and_align_are_separate_groups() {
        assert_eq!(
            cn!("text-xs text-muted-foreground", "text-center"),
            "text-xs text-muted-foreground text-center"
        );
        assert_eq!(cn!("text-sm", "text-red-500", "text-lg"), "text-red-500 text-lg");
        assert_eq!(cn!("text-[14px]", "text-[#333]"), "text-[14px] text-[#333]");
        assert_eq!(cn!("text-[14px]", "text-base"), "text-base");
    }

    #[test]
    fn test_border_width_style_and_color() {
        assert_eq!(
            cn!("border", "border-2", "border-red-500", "border-dashed"),
            "border-2 border-red-500 border-dashed"
        );
        assert_eq!(cn!("border-x-2", "border"), "border");
        assert_eq!(cn!("border-t-red-500", "border-t-2"), "border-t-red-500 border-t-2");
    }

    #[test]
    fn test_variants_scope_conflicts() {
        assert_eq!(cn!("p-4", "hover:p-2"), "p-4 hover:p-2");
        assert_eq!(cn!("hover:bg-red-500", "hover:bg-blue-500"), "hover:bg-blue-500");
        assert_eq!(cn!("md:hover:p-1", "hover:md:p-2"), "hover:md:p-2");
        assert_eq!(cn!("!p-4", "p-2"), "!p-4 p-2");
        assert_eq!(cn!("p-4!", "!p-2"), "!p-2");
    }

    #[test]
    fn test_negative_arbitrary_and_postfix_values() {
        assert_eq!(cn!("-mt-2", "mt-4"), "mt-4");
        assert_eq!(cn!("p-[3px]", "p-2"), "p-2");
        assert_eq!(cn!("bg-black/50", "bg-white"), "bg-white");
        assert_eq!(cn!("w-1/2", "w-full"), "w-full");
        assert_eq!(cn!("[&>svg]:p-2", "[&>svg]:p-1"), "[&>svg]:p-1");
    }

    #[test]
    fn test_flex_families() {
        assert_eq!(cn!("flex flex-col", "flex-row"), "flex flex-row");
        assert_eq!(cn!("flex-1", "flex-none"), "flex-none");
        assert_eq!(cn!("flex-wrap", "flex-nowrap"), "flex-nowrap");
        assert_eq!(cn!("shrink-0", "shrink"), "shrink");
        assert_eq!(cn!("gap-2", "gap-x-4"), "gap-2 gap-x-4");
        assert_eq!(cn!("gap-x-4", "gap-2"), "gap-2");
    }

    #[test]
    fn test_unknown_classes_only_collapse_exact_duplicates() {
        // Classes keeps the first occurrence of a repeated class
        assert_eq!(cn!("card", "card-header", "card"), "card card-header");
        assert_eq!(cn!("shadow", "shadow-lg"), "shadow-lg");
        assert_eq!(cn!("shadow-lg", "shadow-red-500"), "shadow-lg shadow-red-500");
    }

    #[test]
    fn test_conditional_and_nested_fragments() {
        let disabled = false;
        assert_eq!(cn!(true.then_some("active"), disabled.then_some("disabled")), "active");
        assert_eq!(cn!(["a", "b"], vec![Some("c"), None]), "a b c");
        assert_eq!(cn!(String::from("  x   y "), Some(String::from("z"))), "x y z");
        assert_eq!(cn!(), "");
    }

    #[test]
    fn test_output_is_deterministic() {
        let first = cn!("px-2 py-1 text-sm", "p-3 text-red-500", true.then_some("text-lg"));
        let second = cn!("px-2 py-1 text-sm", "p-3 text-red-500", true.then_some("text-lg"));
        assert_eq!(first, second);
        assert_eq!(first, "p-3 text-red-500 text-lg");
    }

    #[test]
    fn test_accepts_yew_classes_and_attr_values() {
        let base = yew::classes!("rounded-md", "p-2");
        assert_eq!(cn!(base, yew::AttrValue::from("p-4")), "rounded-md p-4");
    }

    #[test]
    fn test_merge_classes_accepts_owned_tokens() {
        let tokens = vec!["m-1".to_string(), "mx-2".to_string(), "m-3".to_string()];
        assert_eq!(merge_classes(tokens), "m-3");
    }
}
