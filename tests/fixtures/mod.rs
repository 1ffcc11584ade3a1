//! Shared XMP packets for the integration tests

#![allow(dead_code)]

/// A packet as written by a raw converter, mixing attribute and element
/// forms across every decoded namespace
pub const LIGHTROOM: &str = r#"<?xpacket begin="" id="W5M0MpCehiHzreSzNTczkc9d"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/" x:xmptk="Adobe XMP Core 5.6-c140 79.160451, 2017/05/06-01:08:21">
 <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
  <rdf:Description rdf:about=""
    xmlns:xmp="http://ns.adobe.com/xap/1.0/"
    xmlns:aux="http://ns.adobe.com/exif/1.0/aux/"
    xmlns:exif="http://ns.adobe.com/exif/1.0/"
    xmlns:tiff="http://ns.adobe.com/tiff/1.0/"
    xmlns:dc="http://purl.org/dc/elements/1.1/"
    xmlns:crs="http://ns.adobe.com/camera-raw-settings/1.0/"
    xmlns:xmpMM="http://ns.adobe.com/xap/1.0/mm/"
    xmlns:stEvt="http://ns.adobe.com/xap/1.0/sType/ResourceEvent#"
   xmp:CreatorTool="Canon EOS 5D Mark III"
   xmp:ModifyDate="2018-03-10T14:05:06.07-05:00"
   xmp:CreateDate="2017-12-30T09:15:42.31"
   xmp:MetadataDate="2018-03-10T14:05:06-05:00"
   xmp:Rating="4"
   xmp:Label="Red"
   aux:SerialNumber="082024001234"
   aux:LensInfo="24/1 105/1 0/0 0/0"
   aux:Lens="EF24-105mm f/4L IS USM"
   aux:LensID="235"
   aux:ImageNumber="0"
   aux:FlashCompensation="-1/3"
   aux:Firmware="1.3.3"
   aux:ApproximateFocusDistance="429/100"
   exif:ExposureTime="1/250"
   exif:FNumber="8/1"
   exif:ExposureProgram="3"
   exif:DateTimeOriginal="2017-12-30T09:15:42.31"
   exif:ExposureBiasValue="0/1"
   exif:FocalLength="50/1"
   exif:PixelXDimension="5760"
   exif:PixelYDimension="3840"
   tiff:Make="Canon"
   tiff:Model="Canon EOS 5D Mark III"
   tiff:Orientation="1"
   tiff:ImageWidth="5760"
   tiff:ImageLength="3840"
   tiff:XResolution="240/1"
   tiff:YResolution="240/1"
   tiff:ResolutionUnit="2"
   dc:format="image/x-canon-cr2"
   crs:Version="10.1"
   crs:ProcessVersion="10.0"
   crs:WhiteBalance="As Shot"
   crs:Temperature="5250"
   crs:Tint="+4"
   crs:Exposure2012="+0.35"
   crs:Contrast2012="+12"
   crs:Highlights2012="-40"
   crs:Shadows2012="+25"
   crs:Whites2012="0"
   crs:Blacks2012="-7"
   crs:Clarity2012="+10"
   crs:Vibrance="+15"
   crs:Saturation="0"
   crs:HasCrop="False"
   crs:AlreadyApplied="True"
   crs:RawFileName="IMG_0042.CR2"
   crs:CameraProfile="Adobe Standard"
   xmpMM:DocumentID="xmp.did:fe607d9b-5fd4-da11-8b77-87757e22306b"
   xmpMM:OriginalDocumentID="0F3A5C1D2B7E4E8F9A1B2C3D4E5F6071"
   xmpMM:InstanceID="xmp.iid:8e3c8e5a-1f2b-4c3d-9e4f-5a6b7c8d9e0f">
   <exif:ISOSpeedRatings>
    <rdf:Seq>
     <rdf:li>400</rdf:li>
    </rdf:Seq>
   </exif:ISOSpeedRatings>
   <dc:creator>
    <rdf:Seq>
     <rdf:li>Jane Doe</rdf:li>
    </rdf:Seq>
   </dc:creator>
   <dc:rights>
    <rdf:Alt>
     <rdf:li xml:lang="x-default">Copyright 2017 Jane Doe</rdf:li>
    </rdf:Alt>
   </dc:rights>
   <dc:title>
    <rdf:Alt>
     <rdf:li xml:lang="x-default">Harbour at dawn</rdf:li>
     <rdf:li xml:lang="fr-FR">Port à l'aube</rdf:li>
    </rdf:Alt>
   </dc:title>
   <dc:subject>
    <rdf:Bag>
     <rdf:li>harbour</rdf:li>
     <rdf:li>boats</rdf:li>
     <rdf:li>dawn</rdf:li>
    </rdf:Bag>
   </dc:subject>
   <xmpMM:History>
    <rdf:Seq>
     <rdf:li
      stEvt:action="derived"
      stEvt:parameters="converted from image/x-canon-cr2 to image/jpeg"/>
     <rdf:li rdf:parseType="Resource">
      <stEvt:action>saved</stEvt:action>
      <stEvt:when>2018-03-10T14:05:06-05:00</stEvt:when>
     </rdf:li>
    </rdf:Seq>
   </xmpMM:History>
  </rdf:Description>
 </rdf:RDF>
</x:xmpmeta>
<?xpacket end="w"?>"#;

/// Wrap `body` in the root, RDF and Description elements
pub fn packet(body: &str) -> String {
    format!(
        "<x:xmpmeta xmlns:x=\"adobe:ns:meta/\"><rdf:RDF><rdf:Description>{}</rdf:Description></rdf:RDF></x:xmpmeta>",
        body
    )
}

/// Wrap `attrs` as attributes of the Description element
pub fn attribute_packet(attrs: &str) -> String {
    format!(
        "<x:xmpmeta xmlns:x=\"adobe:ns:meta/\"><rdf:RDF><rdf:Description {}/></rdf:RDF></x:xmpmeta>",
        attrs
    )
}

/// Surround `packet` with bytes that look like an image container
pub fn embed(packet: &str) -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xE1, 0x00, 0x10];
    data.extend_from_slice(b"http://ns.adobe.com/xap/1.0/\0");
    data.extend_from_slice(packet.as_bytes());
    data.extend_from_slice(&[0xFF, 0xDB, 0x00, 0x43, 0x3C, 0x00]);
    data.extend(std::iter::repeat(0x5A).take(4096));
    data.extend_from_slice(&[0xFF, 0xD9]);
    data
}
