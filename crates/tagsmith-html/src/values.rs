//! Keyword types for enumerated attributes.
//!
//! [§ 2.3.3 Keywords and enumerated attributes](https://html.spec.whatwg.org/multipage/common-microsyntaxes.html#keywords-and-enumerated-attributes)
//!
//! "Some attributes, called enumerated attributes, take on a finite set of
//! states." Each type below lists the keywords of one such attribute. A
//! typed value is always legal, so converting it into an
//! [`AttributeValue`] cannot fail. Parsing from a string (`FromStr`) is
//! ASCII case-insensitive, as keywords are.

use strum::VariantNames;
use strum_macros::{Display, EnumString, IntoStaticStr, VariantNames};
use tagsmith_dom::{AttributeValue, Keyword};

macro_rules! keyword_type {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantNames)]
        #[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl Keyword for $name {
            const KEYWORDS: &'static [&'static str] = <Self as VariantNames>::VARIANTS;

            fn keyword(self) -> &'static str {
                self.into()
            }
        }

        impl From<$name> for AttributeValue {
            fn from(value: $name) -> Self {
                Self::keyword(value)
            }
        }
    };
}

keyword_type! {
    /// [§ 4.10.6 The button element](https://html.spec.whatwg.org/multipage/form-elements.html#attr-button-type)
    ButtonType {
        /// "The element is a submit button."
        Submit,
        /// "The element is a reset button."
        Reset,
        /// "The element does nothing."
        Button,
    }
}

keyword_type! {
    /// [§ 4.10.18.6 Form submission](https://html.spec.whatwg.org/multipage/form-control-infrastructure.html#attr-fs-method)
    FormMethod {
        /// Submit as a GET request.
        Get,
        /// Submit as a POST request.
        Post,
        /// Close the enclosing dialog.
        Dialog,
    }
}

keyword_type! {
    /// [§ 4.10.18.6 Form submission](https://html.spec.whatwg.org/multipage/form-control-infrastructure.html#attr-fs-enctype)
    FormEnctype {
        /// The default encoding.
        #[strum(serialize = "application/x-www-form-urlencoded")]
        UrlEncoded,
        /// Required for file uploads.
        #[strum(serialize = "multipart/form-data")]
        Multipart,
        /// Unencoded plain text.
        #[strum(serialize = "text/plain")]
        Plain,
    }
}

keyword_type! {
    /// [§ 4.10.5 The input element](https://html.spec.whatwg.org/multipage/input.html#attr-input-type)
    InputType {
        /// Hidden state.
        Hidden,
        /// Text state, the default.
        Text,
        /// Search state.
        Search,
        /// Telephone state.
        Tel,
        /// URL state.
        Url,
        /// Email state.
        Email,
        /// Password state.
        Password,
        /// Date state.
        Date,
        /// Month state.
        Month,
        /// Week state.
        Week,
        /// Time state.
        Time,
        /// Local Date and Time state.
        DatetimeLocal,
        /// Number state.
        Number,
        /// Range state.
        Range,
        /// Color state.
        Color,
        /// Checkbox state.
        Checkbox,
        /// Radio Button state.
        Radio,
        /// File Upload state.
        File,
        /// Submit Button state.
        Submit,
        /// Image Button state.
        Image,
        /// Reset Button state.
        Reset,
        /// Button state.
        Button,
    }
}

keyword_type! {
    /// [§ 7.3.1.7 Valid navigable target names or keywords](https://html.spec.whatwg.org/multipage/document-sequences.html#valid-navigable-target-name-or-keyword)
    Target {
        /// A new navigable.
        #[strum(serialize = "_blank")]
        Blank,
        /// The current navigable.
        #[strum(serialize = "_self")]
        SelfTarget,
        /// The parent navigable.
        #[strum(serialize = "_parent")]
        Parent,
        /// The top-level traversable.
        #[strum(serialize = "_top")]
        Top,
    }
}

keyword_type! {
    /// [§ 3.2.6.4 The dir attribute](https://html.spec.whatwg.org/multipage/dom.html#the-dir-attribute)
    Dir {
        /// Left-to-right text.
        Ltr,
        /// Right-to-left text.
        Rtl,
        /// Direction determined from the content.
        Auto,
    }
}

keyword_type! {
    /// [§ 2.5.7 Lazy loading attributes](https://html.spec.whatwg.org/multipage/urls-and-fetching.html#lazy-loading-attributes)
    Loading {
        /// Load immediately.
        Eager,
        /// Defer until near the viewport.
        Lazy,
    }
}

keyword_type! {
    /// [§ 4.8.4.3.5 Decoding images](https://html.spec.whatwg.org/multipage/images.html#image-decoding-hint)
    Decoding {
        /// Decode synchronously.
        Sync,
        /// Decode asynchronously.
        Async,
        /// No preference.
        Auto,
    }
}

keyword_type! {
    /// [§ 2.5.4 CORS settings attributes](https://html.spec.whatwg.org/multipage/urls-and-fetching.html#cors-settings-attributes)
    CrossOrigin {
        /// Credentials only for same-origin requests.
        Anonymous,
        /// Always include credentials.
        UseCredentials,
    }
}

keyword_type! {
    /// [§ 2.5.5 Referrer policy attributes](https://html.spec.whatwg.org/multipage/urls-and-fetching.html#referrer-policy-attributes)
    ReferrerPolicy {
        /// Never send a referrer.
        NoReferrer,
        /// Omit the referrer on downgrade to HTTP.
        NoReferrerWhenDowngrade,
        /// Send the origin only.
        Origin,
        /// Full URL for same-origin requests, origin otherwise.
        OriginWhenCrossOrigin,
        /// Full URL for same-origin requests only.
        SameOrigin,
        /// Origin only, and nothing on downgrade.
        StrictOrigin,
        /// The default policy.
        StrictOriginWhenCrossOrigin,
        /// Always send the full URL.
        UnsafeUrl,
    }
}

keyword_type! {
    /// [§ 4.8.11.5 Loading the media resource](https://html.spec.whatwg.org/multipage/media.html#attr-media-preload)
    Preload {
        /// Preload nothing.
        None,
        /// Preload metadata only.
        Metadata,
        /// Preload the whole resource if useful.
        Auto,
    }
}

keyword_type! {
    /// [§ 4.10.11 The textarea element](https://html.spec.whatwg.org/multipage/form-elements.html#attr-textarea-wrap)
    Wrap {
        /// Submitted value is not wrapped.
        Soft,
        /// Submitted value is hard-wrapped.
        Hard,
    }
}

keyword_type! {
    /// [§ 4.8.11 The track element](https://html.spec.whatwg.org/multipage/media.html#attr-track-kind)
    TrackKind {
        /// Translated dialogue.
        Subtitles,
        /// Dialogue and sound effects.
        Captions,
        /// Text descriptions of the video.
        Descriptions,
        /// Chapter titles.
        Chapters,
        /// Data for scripts.
        Metadata,
    }
}

keyword_type! {
    /// [§ 4.8.15 The area element](https://html.spec.whatwg.org/multipage/image-maps.html#attr-area-shape)
    Shape {
        /// A rectangle.
        Rect,
        /// A circle.
        Circle,
        /// A polygon.
        Poly,
        /// The whole image.
        Default,
    }
}

keyword_type! {
    /// [§ 4.9.10 The th element](https://html.spec.whatwg.org/multipage/tables.html#attr-th-scope)
    Scope {
        /// The header applies to cells in the same row.
        Row,
        /// The header applies to cells in the same column.
        Col,
        /// The header applies to the rest of the row group.
        Rowgroup,
        /// The header applies to the rest of the column group.
        Colgroup,
    }
}

keyword_type! {
    /// [§ 2.5.6 Fetch priority attributes](https://html.spec.whatwg.org/multipage/urls-and-fetching.html#fetch-priority-attributes)
    FetchPriority {
        /// Fetch ahead of others.
        High,
        /// Fetch after others.
        Low,
        /// No preference.
        Auto,
    }
}

keyword_type! {
    /// [§ 6.8.6 Autocapitalization](https://html.spec.whatwg.org/multipage/interaction.html#attr-autocapitalize)
    Autocapitalize {
        /// No capitalization.
        Off,
        /// Same as `off`.
        None,
        /// Same as `sentences`.
        On,
        /// First letter of each sentence.
        Sentences,
        /// First letter of each word.
        Words,
        /// Every letter.
        Characters,
    }
}

keyword_type! {
    /// [§ 6.8.1 Making document regions editable](https://html.spec.whatwg.org/multipage/interaction.html#attr-contenteditable)
    ContentEditable {
        /// The element is editable.
        True,
        /// The element is not editable.
        False,
        /// Only the raw text is editable.
        PlaintextOnly,
    }
}

keyword_type! {
    /// [§ 6.11.7 The draggable attribute](https://html.spec.whatwg.org/multipage/dnd.html#the-draggable-attribute)
    Draggable {
        /// The element can be dragged.
        True,
        /// The element cannot be dragged.
        False,
    }
}

keyword_type! {
    /// [§ 3.2.6.2 The translate attribute](https://html.spec.whatwg.org/multipage/dom.html#attr-translate)
    Translate {
        /// Translate the content.
        Yes,
        /// Leave the content unchanged.
        No,
    }
}

keyword_type! {
    /// [§ 6.8.8 Input modalities: the enterkeyhint attribute](https://html.spec.whatwg.org/multipage/interaction.html#attr-enterkeyhint)
    EnterKeyHint {
        /// Insert a new line.
        Enter,
        /// Nothing more to input.
        Done,
        /// Go to the target of the typed text.
        Go,
        /// Move to the next field.
        Next,
        /// Move to the previous field.
        Previous,
        /// Search for the typed text.
        Search,
        /// Deliver the typed text.
        Send,
    }
}

keyword_type! {
    /// [§ 6.8.7 Input modalities: the inputmode attribute](https://html.spec.whatwg.org/multipage/interaction.html#attr-inputmode)
    InputMode {
        /// No virtual keyboard.
        None,
        /// The user's locale keyboard.
        Text,
        /// Fractional numbers.
        Decimal,
        /// Digits.
        Numeric,
        /// Telephone numbers.
        Tel,
        /// Search input.
        Search,
        /// Email addresses.
        Email,
        /// URLs.
        Url,
    }
}

keyword_type! {
    /// [§ 6.12 The popover attribute](https://html.spec.whatwg.org/multipage/popover.html#attr-popover)
    Popover {
        /// Light-dismissable, closes other auto popovers.
        Auto,
        /// Only closed explicitly.
        Manual,
        /// Closes other hint popovers only.
        Hint,
    }
}

keyword_type! {
    /// [§ 4.10.18.7.1 Autofill](https://html.spec.whatwg.org/multipage/form-control-infrastructure.html#autofill-field)
    ///
    /// The most common autofill field names.
    Autocomplete {
        /// Autofill disabled.
        Off,
        /// Autofill with no specific field.
        On,
        /// Full name.
        Name,
        /// Email address.
        Email,
        /// Account name.
        Username,
        /// A new password.
        NewPassword,
        /// The current password.
        CurrentPassword,
        /// One-time code.
        OneTimeCode,
        /// Organization name.
        Organization,
        /// Street address.
        StreetAddress,
        /// Postal code.
        PostalCode,
        /// Country code.
        Country,
        /// Telephone number.
        Tel,
        /// URL.
        Url,
    }
}

keyword_type! {
    /// [§ 4.10.3 The form element](https://html.spec.whatwg.org/multipage/forms.html#attr-form-autocomplete)
    AutocompleteToggle {
        /// Autofill enabled.
        On,
        /// Autofill disabled.
        Off,
    }
}
