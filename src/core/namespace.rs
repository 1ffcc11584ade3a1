//! Namespace and property registry
//!
//! XMP properties are identified by a `prefix:local` qualified name. The
//! reader resolves each name once, at parse time, into a [`Property`]: a
//! pair of closed enums that is cheap to copy and compare. Anything the
//! registry does not know resolves to [`Property::UNKNOWN`].
//!
//! Prefixes are matched by their conventional spelling (`xmp`, `dc`, ...);
//! `xmlns` declarations in the packet are not consulted.

use std::fmt;

/// Built-in XMP namespaces
pub mod ns {
    /// XMP Basic namespace
    pub const XMP: &str = "http://ns.adobe.com/xap/1.0/";
    /// Dublin Core namespace
    pub const DC: &str = "http://purl.org/dc/elements/1.1/";
    /// EXIF namespace
    pub const EXIF: &str = "http://ns.adobe.com/exif/1.0/";
    /// EXIF Aux namespace
    pub const EXIF_AUX: &str = "http://ns.adobe.com/exif/1.0/aux/";
    /// Camera Raw namespace
    pub const CAMERA_RAW: &str = "http://ns.adobe.com/camera-raw-settings/1.0/";
    /// XMP Media Management namespace
    pub const XMP_MM: &str = "http://ns.adobe.com/xap/1.0/mm/";
    /// TIFF namespace
    pub const TIFF: &str = "http://ns.adobe.com/tiff/1.0/";
    /// RDF namespace
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// XML namespace (for xml:lang, etc.)
    pub const XML: &str = "http://www.w3.org/XML/1998/namespace";
    /// Adobe meta namespace of the `x:xmpmeta` wrapper
    pub const X: &str = "adobe:ns:meta/";
    /// Namespace of `xmlns` declarations
    pub const XMLNS: &str = "http://www.w3.org/2000/xmlns/";
}

/// Namespaces known to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Namespace {
    /// Anything not listed below
    Unknown,
    /// `rdf:`
    Rdf,
    /// `x:`
    X,
    /// `xml:`
    Xml,
    /// `xmlns:`
    Xmlns,
    /// `xmp:` and the legacy `xap:`
    Xmp,
    /// `xmpMM:` and the legacy `xapMM:`
    XmpMM,
    /// `dc:`
    Dc,
    /// `aux:`
    Aux,
    /// `exif:`
    Exif,
    /// `tiff:`
    Tiff,
    /// `crs:`
    Crs,
}

impl Namespace {
    /// Resolve a namespace prefix
    pub fn from_prefix(prefix: &[u8]) -> Namespace {
        match prefix {
            b"rdf" => Namespace::Rdf,
            b"x" => Namespace::X,
            b"xml" => Namespace::Xml,
            b"xmlns" => Namespace::Xmlns,
            b"xmp" | b"xap" => Namespace::Xmp,
            b"xmpMM" | b"xapMM" => Namespace::XmpMM,
            b"dc" => Namespace::Dc,
            b"aux" => Namespace::Aux,
            b"exif" => Namespace::Exif,
            b"tiff" => Namespace::Tiff,
            b"crs" => Namespace::Crs,
            _ => Namespace::Unknown,
        }
    }

    /// Conventional prefix of this namespace
    pub fn prefix(self) -> &'static str {
        match self {
            Namespace::Unknown => "",
            Namespace::Rdf => "rdf",
            Namespace::X => "x",
            Namespace::Xml => "xml",
            Namespace::Xmlns => "xmlns",
            Namespace::Xmp => "xmp",
            Namespace::XmpMM => "xmpMM",
            Namespace::Dc => "dc",
            Namespace::Aux => "aux",
            Namespace::Exif => "exif",
            Namespace::Tiff => "tiff",
            Namespace::Crs => "crs",
        }
    }

    /// Namespace URI
    pub fn uri(self) -> &'static str {
        match self {
            Namespace::Unknown => "",
            Namespace::Rdf => ns::RDF,
            Namespace::X => ns::X,
            Namespace::Xml => ns::XML,
            Namespace::Xmlns => ns::XMLNS,
            Namespace::Xmp => ns::XMP,
            Namespace::XmpMM => ns::XMP_MM,
            Namespace::Dc => ns::DC,
            Namespace::Aux => ns::EXIF_AUX,
            Namespace::Exif => ns::EXIF,
            Namespace::Tiff => ns::TIFF,
            Namespace::Crs => ns::CAMERA_RAW,
        }
    }
}

// Generates `Name` together with its per-namespace lookup table.
macro_rules! property_names {
    ($( $ns:ident { $( $variant:ident = $local:literal ),* $(,)? } )*) => {
        /// Local names known to the registry
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub enum Name {
            /// Not registered
            Unknown,
            $($(
                #[doc = concat!("`", $local, "`")]
                $variant,
            )*)*
        }

        impl Name {
            /// Local name as written in a packet
            pub fn as_str(self) -> &'static str {
                match self {
                    Name::Unknown => "",
                    $($( Name::$variant => $local, )*)*
                }
            }

            /// Resolve a local name within a namespace
            pub fn lookup(namespace: Namespace, local: &[u8]) -> Name {
                let Ok(local) = std::str::from_utf8(local) else {
                    return Name::Unknown;
                };
                match (namespace, local) {
                    $($( (Namespace::$ns, $local) => Name::$variant, )*)*
                    _ => Name::Unknown,
                }
            }
        }
    };
}

property_names! {
    Rdf {
        Rdf = "RDF",
        Description = "Description",
        Bag = "Bag",
        Seq = "Seq",
        Alt = "Alt",
        Li = "li",
        About = "about",
        Resource = "resource",
        ParseType = "parseType",
    }
    X {
        XmpMeta = "xmpmeta",
        XmpTk = "xmptk",
    }
    Xml {
        Lang = "lang",
    }
    Xmp {
        CreateDate = "CreateDate",
        CreatorTool = "CreatorTool",
        Label = "Label",
        MetadataDate = "MetadataDate",
        ModifyDate = "ModifyDate",
        Rating = "Rating",
    }
    XmpMM {
        DocumentID = "DocumentID",
        InstanceID = "InstanceID",
        OriginalDocumentID = "OriginalDocumentID",
    }
    Dc {
        Creator = "creator",
        Rights = "rights",
        Title = "title",
        DcDescription = "description",
        Subject = "subject",
        Format = "format",
        Contributor = "contributor",
        Publisher = "publisher",
        Language = "language",
    }
    Aux {
        SerialNumber = "SerialNumber",
        LensInfo = "LensInfo",
        Lens = "Lens",
        LensID = "LensID",
        LensSerialNumber = "LensSerialNumber",
        ImageNumber = "ImageNumber",
        FlashCompensation = "FlashCompensation",
        Firmware = "Firmware",
        ApproximateFocusDistance = "ApproximateFocusDistance",
    }
    Exif {
        ExposureTime = "ExposureTime",
        FNumber = "FNumber",
        ExposureProgram = "ExposureProgram",
        ISOSpeedRatings = "ISOSpeedRatings",
        DateTimeOriginal = "DateTimeOriginal",
        DateTimeDigitized = "DateTimeDigitized",
        ExposureBiasValue = "ExposureBiasValue",
        FocalLength = "FocalLength",
        PixelXDimension = "PixelXDimension",
        PixelYDimension = "PixelYDimension",
    }
    Tiff {
        Make = "Make",
        Model = "Model",
        Orientation = "Orientation",
        ImageWidth = "ImageWidth",
        ImageLength = "ImageLength",
        XResolution = "XResolution",
        YResolution = "YResolution",
        ResolutionUnit = "ResolutionUnit",
        Software = "Software",
        Artist = "Artist",
        Copyright = "Copyright",
        DateTime = "DateTime",
    }
    Crs {
        Version = "Version",
        ProcessVersion = "ProcessVersion",
        WhiteBalance = "WhiteBalance",
        Temperature = "Temperature",
        Tint = "Tint",
        Exposure2012 = "Exposure2012",
        Contrast2012 = "Contrast2012",
        Highlights2012 = "Highlights2012",
        Shadows2012 = "Shadows2012",
        Whites2012 = "Whites2012",
        Blacks2012 = "Blacks2012",
        Clarity2012 = "Clarity2012",
        Vibrance = "Vibrance",
        Saturation = "Saturation",
        HasCrop = "HasCrop",
        AlreadyApplied = "AlreadyApplied",
        RawFileName = "RawFileName",
        CameraProfile = "CameraProfile",
    }
}

/// Canonical identity of a `prefix:local` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Property {
    namespace: Namespace,
    name: Name,
}

impl Property {
    /// Sentinel for anything the registry does not know
    pub const UNKNOWN: Property = Property::new(Namespace::Unknown, Name::Unknown);
    /// Identity of the packet's outer `x:xmpmeta` tag
    pub const ROOT: Property = Property::new(Namespace::X, Name::XmpMeta);
    /// `rdf:Bag`
    pub const RDF_BAG: Property = Property::new(Namespace::Rdf, Name::Bag);
    /// `rdf:Seq`
    pub const RDF_SEQ: Property = Property::new(Namespace::Rdf, Name::Seq);
    /// `rdf:Alt`
    pub const RDF_ALT: Property = Property::new(Namespace::Rdf, Name::Alt);
    /// `rdf:li`
    pub const RDF_LI: Property = Property::new(Namespace::Rdf, Name::Li);

    /// Build a property from already resolved parts
    pub const fn new(namespace: Namespace, name: Name) -> Self {
        Self { namespace, name }
    }

    /// Resolve a `prefix:local` pair through the registry
    ///
    /// Unregistered prefixes, and unregistered local names inside a known
    /// namespace, both resolve to [`Property::UNKNOWN`].
    pub fn identify(prefix: &[u8], local: &[u8]) -> Property {
        let namespace = Namespace::from_prefix(prefix);
        if namespace == Namespace::Unknown {
            return Property::UNKNOWN;
        }
        match Name::lookup(namespace, local) {
            Name::Unknown => Property::UNKNOWN,
            name => Property::new(namespace, name),
        }
    }

    /// Resolve a qualified name such as `dc:subject`
    pub fn from_qualified(qname: &[u8]) -> Property {
        match memchr::memchr(b':', qname) {
            Some(colon) => Property::identify(&qname[..colon], &qname[colon + 1..]),
            None => Property::UNKNOWN,
        }
    }

    /// Namespace of this property
    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// Local name of this property
    pub fn name(&self) -> Name {
        self.name
    }

    /// Whether this is the unknown sentinel
    pub fn is_unknown(&self) -> bool {
        *self == Property::UNKNOWN
    }

    /// Whether this is one of the RDF list containers (Bag, Seq, Alt)
    pub fn is_container(&self) -> bool {
        matches!(
            *self,
            Property::RDF_BAG | Property::RDF_SEQ | Property::RDF_ALT
        )
    }
}

impl Default for Property {
    fn default() -> Self {
        Property::UNKNOWN
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            return f.write_str("<unknown>");
        }
        write!(f, "{}:{}", self.namespace.prefix(), self.name.as_str())
    }
}
