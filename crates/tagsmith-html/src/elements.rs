//! The element catalog.
//!
//! [§ 4 The elements of HTML](https://html.spec.whatwg.org/multipage/semantics.html)
//!
//! Every element has a [`Tag`] variant, a static [`ElementDescriptor`], a
//! table of element-specific [`AttributeSpec`]s and a typed builder with
//! one setter per attribute. Builders of void elements have no way to add
//! children; builders of raw text elements only accept character data.
//!
//! Obsolete elements and attributes are marked `#[deprecated]` and carry a
//! [`Deprecation`] record that the lint pass reports.

use std::fmt;
use std::str::FromStr;

use tagsmith_dom::{
    Attribute, AttributeValue, Deprecation, ElementBuilder, ElementDescriptor, Error, IntoNode,
    Keyword, ListSeparator, ListValue, Node, Number, StructuralError,
};

use crate::attributes::{
    AttributeShape, AttributeSpec, GlobalAttributes, catalog_attribute, global_attribute,
};
use crate::values::{
    Autocomplete, AutocompleteToggle, ButtonType, CrossOrigin, Decoding, FetchPriority,
    FormEnctype, FormMethod, InputType, Loading, Preload, ReferrerPolicy, Scope, Shape, Target,
    TrackKind, Wrap,
};

macro_rules! deprecation {
    () => {
        None
    };
    ($replacement:literal) => {
        Some(Deprecation::new($replacement))
    };
}

macro_rules! attribute_name {
    ($method:ident) => {
        stringify!($method)
    };
    ($method:ident = $name:literal) => {
        $name
    };
}

macro_rules! attribute_shape {
    (Flag) => {
        AttributeShape::Flag
    };
    (Text) => {
        AttributeShape::Text
    };
    (Number) => {
        AttributeShape::Number
    };
    (Tokens) => {
        AttributeShape::List(ListSeparator::Space)
    };
    (Commas) => {
        AttributeShape::List(ListSeparator::Comma)
    };
    (Keyword<$keyword:ty>) => {
        AttributeShape::Keyword(<$keyword as Keyword>::KEYWORDS)
    };
}

macro_rules! content_descriptor {
    (Void, $descriptor:expr) => {
        $descriptor.void()
    };
    (RawText, $descriptor:expr) => {
        $descriptor.raw_text()
    };
    (Normal, $descriptor:expr) => {
        $descriptor
    };
}

macro_rules! attribute_setter {
    ($(#[$meta:meta])* [$($replacement:literal)?] $method:ident = $name:expr, Flag) => {
        $(#[$meta])*
        $(#[deprecated(note = $replacement)])?
        #[must_use]
        pub fn $method(self, present: bool) -> Self {
            self.attribute(catalog_attribute(
                $name,
                AttributeValue::boolean(present),
                deprecation!($($replacement)?),
            ))
        }
    };
    ($(#[$meta:meta])* [$($replacement:literal)?] $method:ident = $name:expr, Text) => {
        $(#[$meta])*
        $(#[deprecated(note = $replacement)])?
        #[must_use]
        pub fn $method(self, value: impl Into<String>) -> Self {
            self.attribute(catalog_attribute(
                $name,
                AttributeValue::string(value),
                deprecation!($($replacement)?),
            ))
        }
    };
    ($(#[$meta:meta])* [$($replacement:literal)?] $method:ident = $name:expr, Number) => {
        $(#[$meta])*
        $(#[deprecated(note = $replacement)])?
        #[must_use]
        pub fn $method(self, value: impl Into<Number>) -> Self {
            self.attribute(catalog_attribute(
                $name,
                AttributeValue::number(value),
                deprecation!($($replacement)?),
            ))
        }
    };
    ($(#[$meta:meta])* [$($replacement:literal)?] $method:ident = $name:expr, Tokens) => {
        $(#[$meta])*
        $(#[deprecated(note = $replacement)])?
        #[must_use]
        pub fn $method<T, V>(self, items: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.attribute(catalog_attribute(
                $name,
                ListValue::space_separated(items).into(),
                deprecation!($($replacement)?),
            ))
        }
    };
    ($(#[$meta:meta])* [$($replacement:literal)?] $method:ident = $name:expr, Commas) => {
        $(#[$meta])*
        $(#[deprecated(note = $replacement)])?
        #[must_use]
        pub fn $method<T, V>(self, items: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.attribute(catalog_attribute(
                $name,
                ListValue::comma_separated(items).into(),
                deprecation!($($replacement)?),
            ))
        }
    };
    ($(#[$meta:meta])* [$($replacement:literal)?] $method:ident = $name:expr, Keyword<$keyword:ty>) => {
        $(#[$meta])*
        $(#[deprecated(note = $replacement)])?
        #[must_use]
        pub fn $method(self, value: $keyword) -> Self {
            self.attribute(catalog_attribute(
                $name,
                AttributeValue::keyword(value),
                deprecation!($($replacement)?),
            ))
        }
    };
}

macro_rules! content_methods {
    (Void) => {};
    (RawText) => {
        /// Append character data, escaped when written.
        #[must_use]
        pub fn text(mut self, text: impl Into<String>) -> Self {
            self.inner = self.inner.child(Node::text(text));
            self
        }

        /// Append the element's verbatim body, such as a script or a
        /// style sheet. Any closing tag for this element inside it is
        /// neutralized when written.
        #[must_use]
        pub fn raw(mut self, content: impl Into<String>) -> Self {
            self.inner = self.inner.child(Node::raw(content));
            self
        }
    };
    (Normal) => {
        /// Append a child node or element builder.
        #[must_use]
        pub fn child(mut self, child: impl IntoNode) -> Self {
            self.inner = self.inner.child(child);
            self
        }

        /// Append several children in order.
        #[must_use]
        pub fn children<C>(mut self, children: C) -> Self
        where
            C: IntoIterator,
            C::Item: IntoNode,
        {
            self.inner = self.inner.children(children);
            self
        }

        /// Append character data, escaped when written.
        #[must_use]
        pub fn text(self, text: impl Into<String>) -> Self {
            self.child(Node::text(text))
        }

        /// Append trusted markup, written verbatim.
        #[must_use]
        pub fn raw(self, markup: impl Into<String>) -> Self {
            self.child(Node::raw(markup))
        }

        /// Append a comment. Text that would end the comment early fails
        /// the build.
        #[must_use]
        pub fn comment(self, text: impl Into<String>) -> Self {
            self.child(Node::comment(text))
        }
    };
}

macro_rules! elements {
    (
        $(
            $(#[$meta:meta])*
            $func:ident($Builder:ident): $content:ident $([$($flag:ident),+])? $(deprecated($replacement:literal))? {
                $(
                    $(#[$attr_meta:meta])*
                    $method:ident $(= $name:literal)?: $shape:ident $(<$keyword:ty>)? $(deprecated($attr_replacement:literal))?,
                )*
            };
        )*
    ) => {
        /// Every element kind in the catalog.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Tag {
            $(
                #[doc = concat!("`<", stringify!($func), ">`")]
                $Builder,
            )*
        }

        impl Tag {
            /// Every catalog element, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$Builder),*];

            /// The tag name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$Builder => stringify!($func),)*
                }
            }

            /// The element's static descriptor.
            #[must_use]
            pub const fn descriptor(self) -> ElementDescriptor {
                match self {
                    $(Self::$Builder => $Builder::DESCRIPTOR,)*
                }
            }

            /// Attributes specific to the element; global attributes are not
            /// included.
            #[must_use]
            pub const fn attributes(self) -> &'static [AttributeSpec] {
                match self {
                    $(Self::$Builder => $Builder::ATTRIBUTES,)*
                }
            }
        }

        $(
            $(#[$meta])*
            #[derive(Debug, Clone)]
            pub struct $Builder {
                inner: ElementBuilder,
            }

            impl $Builder {
                /// Static facts about the element.
                pub const DESCRIPTOR: ElementDescriptor =
                    content_descriptor!($content, ElementDescriptor::new(stringify!($func)))
                        $($(.$flag())+)?
                        $(.deprecated($replacement))?;

                /// Attributes specific to the element.
                pub const ATTRIBUTES: &'static [AttributeSpec] = &[
                    $(
                        AttributeSpec {
                            name: attribute_name!($method $(= $name)?),
                            shape: attribute_shape!($shape $(<$keyword>)?),
                            deprecation: deprecation!($($attr_replacement)?),
                        },
                    )*
                ];

                /// Start an element with no attributes or children.
                #[must_use]
                pub const fn new() -> Self {
                    Self {
                        inner: ElementBuilder::new(Self::DESCRIPTOR),
                    }
                }

                /// Reject repeated attribute names instead of replacing them.
                #[must_use]
                pub fn strict(mut self) -> Self {
                    self.inner = self.inner.strict();
                    self
                }

                /// Add an attribute, replacing any earlier one of the same
                /// name.
                #[must_use]
                pub fn attribute(mut self, attribute: Attribute) -> Self {
                    self.inner = self.inner.attribute(attribute);
                    self
                }

                /// Finish the element.
                ///
                /// # Errors
                ///
                /// Returns the first error recorded while adding attributes
                /// or children.
                pub fn build(self) -> Result<Node, Error> {
                    self.inner.build()
                }

                content_methods!($content);

                $(
                    attribute_setter! {
                        $(#[$attr_meta])*
                        [$($attr_replacement)?]
                        $method = attribute_name!($method $(= $name)?),
                        $shape $(<$keyword>)?
                    }
                )*
            }

            impl Default for $Builder {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl GlobalAttributes for $Builder {
                fn with_attribute(self, attribute: Attribute) -> Self {
                    self.attribute(attribute)
                }
            }

            impl IntoNode for $Builder {
                fn into_node(self) -> Result<Node, Error> {
                    self.build()
                }
            }

            #[doc = concat!("Start a `<", stringify!($func), ">` element.")]
            $(#[deprecated(note = $replacement)])?
            #[must_use]
            pub const fn $func() -> $Builder {
                $Builder::new()
            }
        )*
    };
}

elements! {
    // ========== § 4.1 The document element, § 4.2 Document metadata ==========

    /// [§ 4.1.1 The html element](https://html.spec.whatwg.org/multipage/semantics.html#the-html-element)
    ///
    /// "The html element represents the root of an HTML document."
    html(Html): Normal [block] {
        /// Application cache manifest.
        manifest: Text deprecated("a web app manifest link"),
    };

    /// [§ 4.2.1 The head element](https://html.spec.whatwg.org/multipage/semantics.html#the-head-element)
    head(Head): Normal [block] {};

    /// [§ 4.2.2 The title element](https://html.spec.whatwg.org/multipage/semantics.html#the-title-element)
    title(Title): Normal [block] {};

    /// [§ 4.2.3 The base element](https://html.spec.whatwg.org/multipage/semantics.html#the-base-element)
    base(Base): Void [block] {
        /// Document base URL.
        href: Text,
        /// Default navigable for hyperlinks.
        target: Keyword<Target>,
    };

    /// [§ 4.2.4 The link element](https://html.spec.whatwg.org/multipage/semantics.html#the-link-element)
    link(Link): Void [block] {
        /// Address of the linked resource.
        href: Text,
        /// Relationship between the document and the resource.
        rel: Tokens,
        /// Destination of a preload request.
        r#as = "as": Text,
        /// CORS mode of the request.
        crossorigin: Keyword<CrossOrigin>,
        /// Media the resource applies to.
        media: Text,
        /// Language of the linked resource.
        hreflang: Text,
        /// MIME type of the linked resource.
        r#type = "type": Text,
        /// Icon sizes.
        sizes: Tokens,
        /// Image candidates for preloading.
        imagesrcset: Commas,
        /// Image sizes for preloading.
        imagesizes: Commas,
        /// Subresource integrity metadata.
        integrity: Text,
        /// Referrer policy of the request.
        referrerpolicy: Keyword<ReferrerPolicy>,
        /// Fetch priority hint.
        fetchpriority: Keyword<FetchPriority>,
        /// Operations blocked until the resource loads.
        blocking: Tokens,
        /// Disable a style sheet link.
        disabled: Flag,
        /// Character encoding of the linked resource.
        charset: Text deprecated("a Content-Type header on the linked resource"),
        /// Reverse relationship.
        rev: Text deprecated("rel with the opposite relationship"),
    };

    /// [§ 4.2.5 The meta element](https://html.spec.whatwg.org/multipage/semantics.html#the-meta-element)
    meta(Meta): Void [block] {
        /// Metadata name.
        name: Text,
        /// Metadata value.
        content: Text,
        /// Character encoding declaration.
        charset: Text,
        /// Pragma directive.
        http_equiv = "http-equiv": Text,
        /// Media the metadata applies to.
        media: Text,
    };

    /// [§ 4.2.6 The style element](https://html.spec.whatwg.org/multipage/semantics.html#the-style-element)
    style(Style): RawText [block] {
        /// Media the style sheet applies to.
        media: Text,
        /// Operations blocked until the style sheet loads.
        blocking: Tokens,
        /// Style sheet language.
        r#type = "type": Text deprecated("omitting the attribute"),
    };

    // ========== § 4.3 Sections ==========

    /// [§ 4.3.1 The body element](https://html.spec.whatwg.org/multipage/sections.html#the-body-element)
    body(Body): Normal [block] {
        /// Background image.
        background: Text deprecated("CSS background-image"),
        /// Background colour.
        bgcolor: Text deprecated("CSS background-color"),
    };

    /// [§ 4.3.2 The article element](https://html.spec.whatwg.org/multipage/sections.html#the-article-element)
    article(Article): Normal [block] {};

    /// [§ 4.3.3 The section element](https://html.spec.whatwg.org/multipage/sections.html#the-section-element)
    section(Section): Normal [block] {};

    /// [§ 4.3.4 The nav element](https://html.spec.whatwg.org/multipage/sections.html#the-nav-element)
    nav(Nav): Normal [block] {};

    /// [§ 4.3.5 The aside element](https://html.spec.whatwg.org/multipage/sections.html#the-aside-element)
    aside(Aside): Normal [block] {};

    /// [§ 4.3.6 The h1, h2, h3, h4, h5, and h6 elements](https://html.spec.whatwg.org/multipage/sections.html#the-h1,-h2,-h3,-h4,-h5,-and-h6-elements)
    h1(H1): Normal [block] {};

    /// Level 2 heading.
    h2(H2): Normal [block] {};

    /// Level 3 heading.
    h3(H3): Normal [block] {};

    /// Level 4 heading.
    h4(H4): Normal [block] {};

    /// Level 5 heading.
    h5(H5): Normal [block] {};

    /// Level 6 heading.
    h6(H6): Normal [block] {};

    /// [§ 4.3.7 The hgroup element](https://html.spec.whatwg.org/multipage/sections.html#the-hgroup-element)
    hgroup(Hgroup): Normal [block] {};

    /// [§ 4.3.8 The header element](https://html.spec.whatwg.org/multipage/sections.html#the-header-element)
    header(Header): Normal [block] {};

    /// [§ 4.3.9 The footer element](https://html.spec.whatwg.org/multipage/sections.html#the-footer-element)
    footer(Footer): Normal [block] {};

    /// [§ 4.3.10 The address element](https://html.spec.whatwg.org/multipage/sections.html#the-address-element)
    address(Address): Normal [block] {};

    // ========== § 4.4 Grouping content ==========

    /// [§ 4.4.1 The p element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-p-element)
    ///
    /// "The p element represents a paragraph."
    p(P): Normal [block] {
        /// Horizontal alignment.
        align: Text deprecated("CSS text-align"),
    };

    /// [§ 4.4.2 The hr element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-hr-element)
    ///
    /// "The hr element represents a paragraph-level thematic break."
    hr(Hr): Void [block] {
        /// Horizontal alignment.
        align: Text deprecated("CSS margin"),
        /// Draw without shading.
        noshade: Flag deprecated("CSS border"),
        /// Rule height.
        size: Number deprecated("CSS height"),
        /// Rule width.
        width: Number deprecated("CSS width"),
    };

    /// [§ 4.4.3 The pre element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-pre-element)
    ///
    /// "The pre element represents a block of preformatted text."
    pre(Pre): Normal [block, preformatted] {
        /// Preferred line length.
        width: Number deprecated("CSS width"),
    };

    /// [§ 4.4.4 The blockquote element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-blockquote-element)
    blockquote(Blockquote): Normal [block] {
        /// Source of the quotation.
        cite: Text,
    };

    /// [§ 4.4.5 The ol element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-ol-element)
    ol(Ol): Normal [block] {
        /// Number the list in descending order.
        reversed: Flag,
        /// Starting value of the list.
        start: Number,
        /// Kind of marker: `1`, `a`, `A`, `i` or `I`. Case-sensitive.
        r#type = "type": Text,
        /// Render the list compactly.
        compact: Flag deprecated("CSS"),
    };

    /// [§ 4.4.6 The ul element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-ul-element)
    ul(Ul): Normal [block] {
        /// Render the list compactly.
        compact: Flag deprecated("CSS"),
        /// Kind of marker.
        r#type = "type": Text deprecated("CSS list-style-type"),
    };

    /// [§ 4.4.7 The menu element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-menu-element)
    menu(Menu): Normal [block] {};

    /// [§ 4.4.8 The li element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-li-element)
    li(Li): Normal [block] {
        /// Ordinal value of the item.
        value: Number,
        /// Kind of marker.
        r#type = "type": Text deprecated("CSS list-style-type"),
    };

    /// [§ 4.4.9 The dl element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-dl-element)
    dl(Dl): Normal [block] {
        /// Render the list compactly.
        compact: Flag deprecated("CSS"),
    };

    /// [§ 4.4.10 The dt element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-dt-element)
    dt(Dt): Normal [block] {};

    /// [§ 4.4.11 The dd element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-dd-element)
    dd(Dd): Normal [block] {};

    /// [§ 4.4.12 The figure element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-figure-element)
    figure(Figure): Normal [block] {};

    /// [§ 4.4.13 The figcaption element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-figcaption-element)
    figcaption(Figcaption): Normal [block] {};

    /// [§ 4.4.14 The main element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-main-element)
    main(Main): Normal [block] {};

    /// [§ 4.4.15 The search element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-search-element)
    search(Search): Normal [block] {};

    /// [§ 4.4.16 The div element](https://html.spec.whatwg.org/multipage/grouping-content.html#the-div-element)
    ///
    /// "The div element has no special meaning at all."
    div(Div): Normal [block] {
        /// Horizontal alignment.
        align: Text deprecated("CSS text-align"),
    };

    // ========== § 4.5 Text-level semantics ==========

    /// [§ 4.5.1 The a element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-a-element)
    a(A): Normal {
        /// Address of the hyperlink.
        href: Text,
        /// Navigable for the hyperlink.
        target: Keyword<Target>,
        /// Download the resource instead of navigating, optionally with a
        /// file name.
        download: Text,
        /// URLs to notify when the hyperlink is followed.
        ping: Tokens,
        /// Relationship of the target to the document.
        rel: Tokens,
        /// Language of the linked resource.
        hreflang: Text,
        /// Hint for the MIME type of the linked resource.
        r#type = "type": Text,
        /// Referrer policy for the navigation.
        referrerpolicy: Keyword<ReferrerPolicy>,
        /// Anchor name.
        name: Text deprecated("the id attribute"),
        /// Character encoding of the linked resource.
        charset: Text deprecated("a Content-Type header on the linked resource"),
        /// Reverse relationship.
        rev: Text deprecated("rel with the opposite relationship"),
        /// Image map region coordinates.
        coords: Commas deprecated("an area element"),
        /// Image map region shape.
        shape: Keyword<Shape> deprecated("an area element"),
    };

    /// [§ 4.5.2 The em element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-em-element)
    em(Em): Normal {};

    /// [§ 4.5.3 The strong element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-strong-element)
    strong(Strong): Normal {};

    /// [§ 4.5.4 The small element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-small-element)
    small(Small): Normal {};

    /// [§ 4.5.5 The s element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-s-element)
    s(S): Normal {};

    /// [§ 4.5.6 The cite element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-cite-element)
    cite(Cite): Normal {};

    /// [§ 4.5.7 The q element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-q-element)
    q(Q): Normal {
        /// Source of the quotation.
        cite: Text,
    };

    /// [§ 4.5.8 The dfn element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-dfn-element)
    dfn(Dfn): Normal {};

    /// [§ 4.5.9 The abbr element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-abbr-element)
    abbr(Abbr): Normal {};

    /// [§ 4.5.10 The ruby element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-ruby-element)
    ruby(Ruby): Normal {};

    /// [§ 4.5.11 The rt element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-rt-element)
    rt(Rt): Normal {};

    /// [§ 4.5.12 The rp element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-rp-element)
    rp(Rp): Normal {};

    /// [§ 4.5.13 The data element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-data-element)
    data(Data): Normal {
        /// Machine-readable form of the contents.
        value: Text,
    };

    /// [§ 4.5.14 The time element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-time-element)
    time(Time): Normal {
        /// Machine-readable date, time or duration.
        datetime: Text,
    };

    /// [§ 4.5.15 The code element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-code-element)
    code(Code): Normal {};

    /// [§ 4.5.16 The var element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-var-element)
    var(Var): Normal {};

    /// [§ 4.5.17 The samp element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-samp-element)
    samp(Samp): Normal {};

    /// [§ 4.5.18 The kbd element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-kbd-element)
    kbd(Kbd): Normal {};

    /// [§ 4.5.19 The sub and sup elements](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-sub-and-sup-elements)
    sub(Sub): Normal {};

    /// Superscript.
    sup(Sup): Normal {};

    /// [§ 4.5.20 The i element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-i-element)
    i(I): Normal {};

    /// [§ 4.5.21 The b element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-b-element)
    b(B): Normal {};

    /// [§ 4.5.22 The u element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-u-element)
    u(U): Normal {};

    /// [§ 4.5.23 The mark element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-mark-element)
    mark(Mark): Normal {};

    /// [§ 4.5.24 The bdi element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-bdi-element)
    bdi(Bdi): Normal {};

    /// [§ 4.5.25 The bdo element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-bdo-element)
    bdo(Bdo): Normal {};

    /// [§ 4.5.26 The span element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-span-element)
    span(Span): Normal {};

    /// [§ 4.5.27 The br element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-br-element)
    ///
    /// "The br element represents a line break."
    br(Br): Void {
        /// Clear floats before breaking.
        clear: Text deprecated("CSS clear"),
    };

    /// [§ 4.5.28 The wbr element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-wbr-element)
    wbr(Wbr): Void {};

    // ========== § 4.7 Edits ==========

    /// [§ 4.7.1 The ins element](https://html.spec.whatwg.org/multipage/edits.html#the-ins-element)
    ins(Ins): Normal {
        /// Explanation of the change.
        cite: Text,
        /// When the change was made.
        datetime: Text,
    };

    /// [§ 4.7.2 The del element](https://html.spec.whatwg.org/multipage/edits.html#the-del-element)
    del(Del): Normal {
        /// Explanation of the change.
        cite: Text,
        /// When the change was made.
        datetime: Text,
    };

    // ========== § 4.8 Embedded content ==========

    /// [§ 4.8.1 The picture element](https://html.spec.whatwg.org/multipage/embedded-content.html#the-picture-element)
    picture(Picture): Normal {};

    /// [§ 4.8.2 The source element](https://html.spec.whatwg.org/multipage/embedded-content.html#the-source-element)
    source(Source): Void {
        /// Address of a media resource.
        src: Text,
        /// Image candidates.
        srcset: Commas,
        /// Image sizes.
        sizes: Commas,
        /// Media the source applies to.
        media: Text,
        /// MIME type of the resource.
        r#type = "type": Text,
        /// Intrinsic width.
        width: Number,
        /// Intrinsic height.
        height: Number,
    };

    /// [§ 4.8.3 The img element](https://html.spec.whatwg.org/multipage/embedded-content.html#the-img-element)
    img(Img): Void {
        /// Replacement text.
        alt: Text,
        /// Address of the image.
        src: Text,
        /// Image candidates.
        srcset: Commas,
        /// Image sizes.
        sizes: Commas,
        /// CORS mode of the request.
        crossorigin: Keyword<CrossOrigin>,
        /// Name of the image map to use.
        usemap: Text,
        /// Whether the image is a server-side image map.
        ismap: Flag,
        /// Rendered width.
        width: Number,
        /// Rendered height.
        height: Number,
        /// Referrer policy of the request.
        referrerpolicy: Keyword<ReferrerPolicy>,
        /// Decoding hint.
        decoding: Keyword<Decoding>,
        /// Loading strategy.
        loading: Keyword<Loading>,
        /// Fetch priority hint.
        fetchpriority: Keyword<FetchPriority>,
        /// Alignment.
        align: Text deprecated("CSS float or vertical-align"),
        /// Border width.
        border: Number deprecated("CSS border-width"),
        /// Horizontal spacing.
        hspace: Number deprecated("CSS margin-left and margin-right"),
        /// Vertical spacing.
        vspace: Number deprecated("CSS margin-top and margin-bottom"),
        /// Long description.
        longdesc: Text deprecated("a link to the description"),
        /// Image name.
        name: Text deprecated("the id attribute"),
    };

    /// [§ 4.8.5 The iframe element](https://html.spec.whatwg.org/multipage/iframe-embed-object.html#the-iframe-element)
    iframe(Iframe): RawText {
        /// Address of the page.
        src: Text,
        /// Inline document contents.
        srcdoc: Text,
        /// Name of the content navigable.
        name: Text,
        /// Restrictions on the content.
        sandbox: Tokens,
        /// Permissions policy for the content.
        allow: Text,
        /// Allow the content to go full screen.
        allowfullscreen: Flag,
        /// Frame width.
        width: Number,
        /// Frame height.
        height: Number,
        /// Referrer policy of the request.
        referrerpolicy: Keyword<ReferrerPolicy>,
        /// Loading strategy.
        loading: Keyword<Loading>,
        /// Draw a border.
        frameborder: Text deprecated("CSS border"),
        /// Scrollbar behaviour.
        scrolling: Text deprecated("CSS overflow"),
    };

    /// [§ 4.8.6 The embed element](https://html.spec.whatwg.org/multipage/iframe-embed-object.html#the-embed-element)
    embed(Embed): Void {
        /// Address of the resource.
        src: Text,
        /// MIME type of the resource.
        r#type = "type": Text,
        /// Rendered width.
        width: Number,
        /// Rendered height.
        height: Number,
    };

    /// [§ 4.8.7 The object element](https://html.spec.whatwg.org/multipage/iframe-embed-object.html#the-object-element)
    object(Object): Normal {
        /// Address of the resource.
        data_url = "data": Text,
        /// MIME type of the resource.
        r#type = "type": Text,
        /// Name of the content navigable.
        name: Text,
        /// Associated form owner.
        form: Text,
        /// Rendered width.
        width: Number,
        /// Rendered height.
        height: Number,
        /// Resources the object depends on.
        archive: Text deprecated("the data and type attributes"),
        /// Plugin class identifier.
        classid: Text deprecated("the data and type attributes"),
        /// Base URL for classid.
        codebase: Text deprecated("the data and type attributes"),
        /// Declare without instantiating.
        declare: Flag deprecated("repeating the object element"),
        /// Message shown while loading.
        standby: Text deprecated("a lightweight page that loads quickly"),
    };

    /// [§ 4.8.8 The video element](https://html.spec.whatwg.org/multipage/media.html#the-video-element)
    video(Video): Normal {
        /// Address of the media resource.
        src: Text,
        /// CORS mode of the request.
        crossorigin: Keyword<CrossOrigin>,
        /// Image shown before playback.
        poster: Text,
        /// How much to buffer ahead of playback.
        preload: Keyword<Preload>,
        /// Start playing when possible.
        autoplay: Flag,
        /// Play inline rather than full screen.
        playsinline: Flag,
        /// Restart at the end.
        r#loop = "loop": Flag,
        /// Start muted.
        muted: Flag,
        /// Show user controls.
        controls: Flag,
        /// Rendered width.
        width: Number,
        /// Rendered height.
        height: Number,
    };

    /// [§ 4.8.9 The audio element](https://html.spec.whatwg.org/multipage/media.html#the-audio-element)
    audio(Audio): Normal {
        /// Address of the media resource.
        src: Text,
        /// CORS mode of the request.
        crossorigin: Keyword<CrossOrigin>,
        /// How much to buffer ahead of playback.
        preload: Keyword<Preload>,
        /// Start playing when possible.
        autoplay: Flag,
        /// Restart at the end.
        r#loop = "loop": Flag,
        /// Start muted.
        muted: Flag,
        /// Show user controls.
        controls: Flag,
    };

    /// [§ 4.8.10 The track element](https://html.spec.whatwg.org/multipage/media.html#the-track-element)
    track(Track): Void {
        /// Kind of text track.
        kind: Keyword<TrackKind>,
        /// Address of the track data.
        src: Text,
        /// Language of the track.
        srclang: Text,
        /// User-visible label.
        label: Text,
        /// Enable the track by default.
        is_default = "default": Flag,
    };

    /// [§ 4.8.13 The map element](https://html.spec.whatwg.org/multipage/image-maps.html#the-map-element)
    map(Map): Normal {
        /// Name referenced by usemap.
        name: Text,
    };

    /// [§ 4.8.14 The area element](https://html.spec.whatwg.org/multipage/image-maps.html#the-area-element)
    area(Area): Void {
        /// Replacement text.
        alt: Text,
        /// Region coordinates.
        coords: Commas,
        /// Region shape.
        shape: Keyword<Shape>,
        /// Address of the hyperlink.
        href: Text,
        /// Navigable for the hyperlink.
        target: Keyword<Target>,
        /// Download the resource instead of navigating.
        download: Text,
        /// URLs to notify when the hyperlink is followed.
        ping: Tokens,
        /// Relationship of the target to the document.
        rel: Tokens,
        /// Referrer policy for the navigation.
        referrerpolicy: Keyword<ReferrerPolicy>,
        /// Region without a hyperlink.
        nohref: Flag deprecated("omitting the href attribute"),
    };

    // ========== § 4.9 Tabular data ==========

    /// [§ 4.9.1 The table element](https://html.spec.whatwg.org/multipage/tables.html#the-table-element)
    table(Table): Normal [block] {
        /// Table alignment.
        align: Text deprecated("CSS margin"),
        /// Background colour.
        bgcolor: Text deprecated("CSS background-color"),
        /// Border width.
        border: Number deprecated("CSS border"),
        /// Cell padding.
        cellpadding: Text deprecated("CSS padding"),
        /// Cell spacing.
        cellspacing: Text deprecated("CSS border-spacing"),
        /// Table description.
        summary: Text deprecated("a caption element"),
        /// Table width.
        width: Text deprecated("CSS width"),
    };

    /// [§ 4.9.2 The caption element](https://html.spec.whatwg.org/multipage/tables.html#the-caption-element)
    caption(Caption): Normal [block] {};

    /// [§ 4.9.3 The colgroup element](https://html.spec.whatwg.org/multipage/tables.html#the-colgroup-element)
    colgroup(Colgroup): Normal [block] {
        /// Number of columns spanned.
        span: Number,
    };

    /// [§ 4.9.4 The col element](https://html.spec.whatwg.org/multipage/tables.html#the-col-element)
    col(Col): Void [block] {
        /// Number of columns spanned.
        span: Number,
    };

    /// [§ 4.9.5 The tbody element](https://html.spec.whatwg.org/multipage/tables.html#the-tbody-element)
    tbody(Tbody): Normal [block] {};

    /// [§ 4.9.6 The thead element](https://html.spec.whatwg.org/multipage/tables.html#the-thead-element)
    thead(Thead): Normal [block] {};

    /// [§ 4.9.7 The tfoot element](https://html.spec.whatwg.org/multipage/tables.html#the-tfoot-element)
    tfoot(Tfoot): Normal [block] {};

    /// [§ 4.9.8 The tr element](https://html.spec.whatwg.org/multipage/tables.html#the-tr-element)
    tr(Tr): Normal [block] {
        /// Background colour.
        bgcolor: Text deprecated("CSS background-color"),
    };

    /// [§ 4.9.9 The td element](https://html.spec.whatwg.org/multipage/tables.html#the-td-element)
    td(Td): Normal [block] {
        /// Number of columns spanned.
        colspan: Number,
        /// Number of rows spanned.
        rowspan: Number,
        /// Ids of the header cells that apply.
        headers: Tokens,
        /// Short form of the cell content.
        abbr: Text deprecated("a shorter cell content, or the title attribute"),
        /// Category of the cell.
        axis: Text deprecated("the scope attribute on a th element"),
        /// Header scope.
        scope: Text deprecated("a th element"),
        /// Disable wrapping.
        nowrap: Flag deprecated("CSS white-space"),
        /// Horizontal alignment.
        align: Text deprecated("CSS text-align"),
        /// Vertical alignment.
        valign: Text deprecated("CSS vertical-align"),
        /// Background colour.
        bgcolor: Text deprecated("CSS background-color"),
        /// Cell width.
        width: Text deprecated("CSS width"),
    };

    /// [§ 4.9.10 The th element](https://html.spec.whatwg.org/multipage/tables.html#the-th-element)
    th(Th): Normal [block] {
        /// Number of columns spanned.
        colspan: Number,
        /// Number of rows spanned.
        rowspan: Number,
        /// Ids of the header cells that apply.
        headers: Tokens,
        /// Cells the header applies to.
        scope: Keyword<Scope>,
        /// Short form of the header.
        abbr: Text,
        /// Disable wrapping.
        nowrap: Flag deprecated("CSS white-space"),
    };

    // ========== § 4.10 Forms ==========

    /// [§ 4.10.3 The form element](https://html.spec.whatwg.org/multipage/forms.html#the-form-element)
    form(Form): Normal [block] {
        /// Submission URL.
        action: Text,
        /// Submission method.
        method: Keyword<FormMethod>,
        /// Submission body encoding.
        enctype: Keyword<FormEnctype>,
        /// Navigable for the response.
        target: Keyword<Target>,
        /// Form name.
        name: Text,
        /// Skip constraint validation.
        novalidate: Flag,
        /// Default autofill setting.
        autocomplete: Keyword<AutocompleteToggle>,
        /// Character encodings for submission.
        accept_charset = "accept-charset": Tokens,
        /// Relationship of the target to the document.
        rel: Tokens,
    };

    /// [§ 4.10.4 The label element](https://html.spec.whatwg.org/multipage/forms.html#the-label-element)
    label(Label): Normal {
        /// Id of the labeled control.
        r#for = "for": Text,
    };

    /// [§ 4.10.5 The input element](https://html.spec.whatwg.org/multipage/input.html#the-input-element)
    input(Input): Void {
        /// Kind of control.
        r#type = "type": Keyword<InputType>,
        /// Control name for submission.
        name: Text,
        /// Control value.
        value: Text,
        /// Hint shown when empty.
        placeholder: Text,
        /// A value is required.
        required: Flag,
        /// The control is disabled.
        disabled: Flag,
        /// The value cannot be edited.
        readonly: Flag,
        /// Checkedness of checkboxes and radio buttons.
        checked: Flag,
        /// Allow several values.
        multiple: Flag,
        /// Lower bound.
        min: Text,
        /// Upper bound.
        max: Text,
        /// Value granularity.
        step: Text,
        /// Minimum length of the value.
        minlength: Number,
        /// Maximum length of the value.
        maxlength: Number,
        /// Display width in characters.
        size: Number,
        /// Pattern the value must match.
        pattern: Text,
        /// Autofill hint.
        autocomplete: Keyword<Autocomplete>,
        /// Accepted file types.
        accept: Commas,
        /// Replacement text for image buttons.
        alt: Text,
        /// Image address for image buttons.
        src: Text,
        /// Id of a datalist with suggestions.
        list: Text,
        /// Associated form owner.
        form: Text,
        /// Submission URL override.
        formaction: Text,
        /// Submission method override.
        formmethod: Keyword<FormMethod>,
        /// Submission encoding override.
        formenctype: Keyword<FormEnctype>,
        /// Response navigable override.
        formtarget: Keyword<Target>,
        /// Skip validation on submission.
        formnovalidate: Flag,
        /// Image button width.
        width: Number,
        /// Image button height.
        height: Number,
        /// Name for submitting the text direction.
        dirname: Text,
        /// Id of the popover to control.
        popovertarget: Text,
        /// Legacy alignment.
        align: Text deprecated("CSS"),
    };

    /// [§ 4.10.6 The button element](https://html.spec.whatwg.org/multipage/form-elements.html#the-button-element)
    button(Button): Normal {
        /// Button behaviour.
        r#type = "type": Keyword<ButtonType>,
        /// Control name for submission.
        name: Text,
        /// Value for submission.
        value: Text,
        /// The button is disabled.
        disabled: Flag,
        /// Associated form owner.
        form: Text,
        /// Submission URL override.
        formaction: Text,
        /// Submission method override.
        formmethod: Keyword<FormMethod>,
        /// Submission encoding override.
        formenctype: Keyword<FormEnctype>,
        /// Response navigable override.
        formtarget: Keyword<Target>,
        /// Skip validation on submission.
        formnovalidate: Flag,
        /// Id of the popover to control.
        popovertarget: Text,
    };

    /// [§ 4.10.7 The select element](https://html.spec.whatwg.org/multipage/form-elements.html#the-select-element)
    select(Select): Normal {
        /// Control name for submission.
        name: Text,
        /// Allow several selections.
        multiple: Flag,
        /// A selection is required.
        required: Flag,
        /// The control is disabled.
        disabled: Flag,
        /// Number of visible options.
        size: Number,
        /// Associated form owner.
        form: Text,
        /// Autofill hint.
        autocomplete: Keyword<Autocomplete>,
    };

    /// [§ 4.10.8 The datalist element](https://html.spec.whatwg.org/multipage/form-elements.html#the-datalist-element)
    datalist(Datalist): Normal {};

    /// [§ 4.10.9 The optgroup element](https://html.spec.whatwg.org/multipage/form-elements.html#the-optgroup-element)
    optgroup(Optgroup): Normal [block] {
        /// Group name.
        label: Text,
        /// The group is disabled.
        disabled: Flag,
    };

    /// [§ 4.10.10 The option element](https://html.spec.whatwg.org/multipage/form-elements.html#the-option-element)
    option(SelectOption): Normal [block] {
        /// Value for submission.
        value: Text,
        /// User-visible label.
        label: Text,
        /// Selected by default.
        selected: Flag,
        /// The option is disabled.
        disabled: Flag,
    };

    /// [§ 4.10.11 The textarea element](https://html.spec.whatwg.org/multipage/form-elements.html#the-textarea-element)
    textarea(Textarea): Normal [preformatted] {
        /// Control name for submission.
        name: Text,
        /// Visible line count.
        rows: Number,
        /// Visible character width.
        cols: Number,
        /// Wrapping of the submitted value.
        wrap: Keyword<Wrap>,
        /// Hint shown when empty.
        placeholder: Text,
        /// A value is required.
        required: Flag,
        /// The value cannot be edited.
        readonly: Flag,
        /// The control is disabled.
        disabled: Flag,
        /// Minimum length of the value.
        minlength: Number,
        /// Maximum length of the value.
        maxlength: Number,
        /// Associated form owner.
        form: Text,
        /// Autofill hint.
        autocomplete: Keyword<Autocomplete>,
        /// Name for submitting the text direction.
        dirname: Text,
    };

    /// [§ 4.10.12 The output element](https://html.spec.whatwg.org/multipage/form-elements.html#the-output-element)
    output(Output): Normal {
        /// Ids of the controls the result depends on.
        r#for = "for": Tokens,
        /// Control name.
        name: Text,
        /// Associated form owner.
        form: Text,
    };

    /// [§ 4.10.13 The progress element](https://html.spec.whatwg.org/multipage/form-elements.html#the-progress-element)
    progress(Progress): Normal {
        /// Amount completed.
        value: Number,
        /// Total amount of work.
        max: Number,
    };

    /// [§ 4.10.14 The meter element](https://html.spec.whatwg.org/multipage/form-elements.html#the-meter-element)
    meter(Meter): Normal {
        /// Current value.
        value: Number,
        /// Lower bound of the range.
        min: Number,
        /// Upper bound of the range.
        max: Number,
        /// Upper bound of the low region.
        low: Number,
        /// Lower bound of the high region.
        high: Number,
        /// Optimum value.
        optimum: Number,
    };

    /// [§ 4.10.15 The fieldset element](https://html.spec.whatwg.org/multipage/form-elements.html#the-fieldset-element)
    fieldset(Fieldset): Normal [block] {
        /// The group is disabled.
        disabled: Flag,
        /// Associated form owner.
        form: Text,
        /// Group name.
        name: Text,
    };

    /// [§ 4.10.16 The legend element](https://html.spec.whatwg.org/multipage/form-elements.html#the-legend-element)
    legend(Legend): Normal [block] {};

    // ========== § 4.11 Interactive elements ==========

    /// [§ 4.11.1 The details element](https://html.spec.whatwg.org/multipage/interactive-elements.html#the-details-element)
    details(Details): Normal [block] {
        /// The details are visible.
        open: Flag,
        /// Exclusive accordion group name.
        name: Text,
    };

    /// [§ 4.11.2 The summary element](https://html.spec.whatwg.org/multipage/interactive-elements.html#the-summary-element)
    summary(Summary): Normal [block] {};

    /// [§ 4.11.4 The dialog element](https://html.spec.whatwg.org/multipage/interactive-elements.html#the-dialog-element)
    dialog(Dialog): Normal [block] {
        /// The dialog is showing.
        open: Flag,
    };

    // ========== § 4.12 Scripting ==========

    /// [§ 4.12.1 The script element](https://html.spec.whatwg.org/multipage/scripting.html#the-script-element)
    script(Script): RawText [block] {
        /// Address of an external script.
        src: Text,
        /// Kind of script.
        r#type = "type": Text,
        /// Execute as soon as available.
        r#async = "async": Flag,
        /// Execute after parsing.
        defer: Flag,
        /// Skip in module-supporting browsers.
        nomodule: Flag,
        /// CORS mode of the request.
        crossorigin: Keyword<CrossOrigin>,
        /// Subresource integrity metadata.
        integrity: Text,
        /// Referrer policy of the request.
        referrerpolicy: Keyword<ReferrerPolicy>,
        /// Operations blocked until the script loads.
        blocking: Tokens,
        /// Fetch priority hint.
        fetchpriority: Keyword<FetchPriority>,
        /// Character encoding of the script.
        charset: Text deprecated("omitting the attribute; scripts are UTF-8"),
        /// Scripting language.
        language: Text deprecated("the type attribute, or omitting it"),
    };

    /// [§ 4.12.2 The noscript element](https://html.spec.whatwg.org/multipage/scripting.html#the-noscript-element)
    noscript(Noscript): Normal [block] {};

    /// [§ 4.12.3 The template element](https://html.spec.whatwg.org/multipage/scripting.html#the-template-element)
    template(Template): Normal [block] {
        /// Declarative shadow root mode.
        shadowrootmode: Text,
    };

    /// [§ 4.12.4 The slot element](https://html.spec.whatwg.org/multipage/scripting.html#the-slot-element)
    slot(Slot): Normal {
        /// Slot name.
        name: Text,
    };

    /// [§ 4.12.5 The canvas element](https://html.spec.whatwg.org/multipage/canvas.html#the-canvas-element)
    canvas(Canvas): Normal {
        /// Bitmap width.
        width: Number,
        /// Bitmap height.
        height: Number,
    };

    // ========== § 16 Obsolete features ==========

    /// [§ 16.2 Non-conforming features](https://html.spec.whatwg.org/multipage/obsolete.html#non-conforming-features)
    acronym(Acronym): Normal deprecated("abbr") {};

    /// Obsolete Java applet container.
    applet(Applet): Normal deprecated("embed or object") {};

    /// Obsolete default font settings.
    basefont(Basefont): Void deprecated("CSS font properties") {};

    /// Obsolete background sound.
    bgsound(Bgsound): Void deprecated("audio") {
        /// Address of the sound.
        src: Text,
    };

    /// Obsolete larger text.
    big(Big): Normal deprecated("CSS font-size") {};

    /// Obsolete blinking text.
    blink(Blink): Normal deprecated("CSS animations") {};

    /// Obsolete centered block.
    center(Center): Normal [block] deprecated("CSS text-align") {};

    /// Obsolete directory list.
    dir(Dir): Normal [block] deprecated("ul") {};

    /// Obsolete font styling.
    font(Font): Normal deprecated("CSS font properties") {
        /// Text colour.
        color: Text,
        /// Font family.
        face: Text,
        /// Font size.
        size: Text,
    };

    /// Obsolete frame.
    frame(Frame): Void deprecated("iframe") {
        /// Address of the page.
        src: Text,
        /// Frame name.
        name: Text,
    };

    /// Obsolete frame layout.
    frameset(Frameset): Normal [block] deprecated("iframe") {
        /// Row sizes.
        rows: Commas,
        /// Column sizes.
        cols: Commas,
    };

    /// Obsolete key pair generator.
    keygen(Keygen): Void deprecated("the Web Cryptography API") {
        /// Control name.
        name: Text,
        /// Challenge string.
        challenge: Text,
        /// Key algorithm.
        keytype: Text,
    };

    /// Obsolete preformatted listing.
    listing(Listing): Normal [block, preformatted] deprecated("pre and code") {};

    /// Obsolete scrolling text.
    marquee(Marquee): Normal deprecated("CSS animations") {
        /// Scrolling behaviour.
        behavior: Text,
        /// Scrolling direction.
        direction: Text,
        /// Scroll distance per step.
        scrollamount: Number,
        /// Number of loops.
        r#loop = "loop": Number,
    };

    /// Obsolete context menu item.
    menuitem(Menuitem): Normal deprecated("script handling the contextmenu event") {};

    /// Obsolete non-breaking text.
    nobr(Nobr): Normal deprecated("CSS white-space") {};

    /// Obsolete fallback for embed.
    noembed(Noembed): RawText deprecated("object") {};

    /// Obsolete fallback for frames.
    noframes(Noframes): RawText deprecated("iframe") {};

    /// Obsolete object parameter.
    param(Param): Void deprecated("the data attribute of object") {
        /// Parameter name.
        name: Text,
        /// Parameter value.
        value: Text,
    };

    /// Obsolete plain text switch.
    plaintext(Plaintext): RawText [block] deprecated("the text/plain MIME type") {};

    /// Obsolete ruby base.
    rb(Rb): Normal deprecated("ruby") {};

    /// Obsolete ruby text container.
    rtc(Rtc): Normal deprecated("ruby") {};

    /// Obsolete strike-through text.
    strike(Strike): Normal deprecated("del or s") {};

    /// Obsolete teletype text.
    tt(Tt): Normal deprecated("kbd, var, code, or samp") {};

    /// Obsolete example listing.
    xmp(Xmp): RawText [block] deprecated("pre and code") {};
}

/// A tag name that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown element <{name}>")]
pub struct UnknownElement {
    /// The name that was looked up.
    pub name: String,
}

impl Tag {
    /// Whether the element is obsolete.
    #[must_use]
    pub fn is_deprecated(self) -> bool {
        self.descriptor().deprecation().is_some()
    }

    /// Look up an attribute accepted by this element: its own attributes
    /// first, then the global ones including `data-*` and `aria-*`.
    #[must_use]
    pub fn attribute(self, name: &str) -> Option<AttributeSpec> {
        self.attributes()
            .iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(name))
            .copied()
            .or_else(|| global_attribute(name))
    }

    /// An untyped builder for the element.
    #[must_use]
    pub const fn builder(self) -> ElementBuilder {
        ElementBuilder::new(self.descriptor())
    }
}

impl FromStr for Tag {
    type Err = UnknownElement;

    /// Tag names match ASCII case-insensitively.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownElement {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up the attribute `name` on the element called `tag`.
///
/// Returns `None` for unknown elements and for attributes the element does
/// not accept.
#[must_use]
pub fn attribute_spec(tag: &str, name: &str) -> Option<AttributeSpec> {
    tag.parse::<Tag>().ok()?.attribute(name)
}

/// [§ 4.13 Custom elements](https://html.spec.whatwg.org/multipage/custom-elements.html)
///
/// Start an autonomous custom element.
///
/// # Errors
///
/// Returns [`StructuralError::InvalidTagName`] if `tag` is not a valid
/// custom element name.
pub fn custom_element(tag: impl Into<String>) -> Result<ElementBuilder, StructuralError> {
    ElementDescriptor::custom(tag).map(ElementBuilder::new)
}
