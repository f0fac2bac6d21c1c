use crate::models::{Entity, delegate_parsable_base, register_model};
use crate::serialization::{DecodeError, EncodeError, Parsable, ParseNode, SerializationWriter, assign_present};
use chrono::NaiveDate;
use model_macros::register_model;
use uuid::Uuid;

// API: https://learn.microsoft.com/en-us/dynamics365/business-central/dev-itpro/api-reference/v1.0/resources/dynamics_salesorderline
#[derive(Debug, Clone, Default, PartialEq)]
#[register_model("#microsoft.graph.salesOrderLine")]
pub struct SalesOrderLine {
    entity: Entity,
    account_id: Option<Uuid>,
    amount_excluding_tax: Option<f64>,
    amount_including_tax: Option<f64>,
    description: Option<String>,
    discount_amount: Option<f64>,
    discount_applied_before_tax: Option<bool>,
    discount_percent: Option<f64>,
    document_id: Option<Uuid>,
    invoice_discount_allocation: Option<f64>,
    invoiced_quantity: Option<f64>,
    invoice_quantity: Option<f64>,
    item_id: Option<Uuid>,
    line_type: Option<String>,
    net_amount: Option<f64>,
    net_amount_including_tax: Option<f64>,
    net_tax_amount: Option<f64>,
    quantity: Option<f64>,
    sequence: Option<i32>,
    shipment_date: Option<NaiveDate>,
    shipped_quantity: Option<f64>,
    ship_quantity: Option<f64>,
    tax_code: Option<String>,
    tax_percent: Option<f64>,
    total_tax_amount: Option<f64>,
    unit_of_measure_id: Option<Uuid>,
    unit_price: Option<f64>,
}

impl SalesOrderLine {
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    pub fn account_id(&self) -> Option<Uuid> {
        self.account_id
    }

    pub fn set_account_id(&mut self, value: Option<Uuid>) {
        self.account_id = value;
    }

    pub fn amount_excluding_tax(&self) -> Option<f64> {
        self.amount_excluding_tax
    }

    pub fn set_amount_excluding_tax(&mut self, value: Option<f64>) {
        self.amount_excluding_tax = value;
    }

    pub fn amount_including_tax(&self) -> Option<f64> {
        self.amount_including_tax
    }

    pub fn set_amount_including_tax(&mut self, value: Option<f64>) {
        self.amount_including_tax = value;
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }

    pub fn discount_amount(&self) -> Option<f64> {
        self.discount_amount
    }

    pub fn set_discount_amount(&mut self, value: Option<f64>) {
        self.discount_amount = value;
    }

    pub fn discount_applied_before_tax(&self) -> Option<bool> {
        self.discount_applied_before_tax
    }

    pub fn set_discount_applied_before_tax(&mut self, value: Option<bool>) {
        self.discount_applied_before_tax = value;
    }

    pub fn discount_percent(&self) -> Option<f64> {
        self.discount_percent
    }

    pub fn set_discount_percent(&mut self, value: Option<f64>) {
        self.discount_percent = value;
    }

    pub fn document_id(&self) -> Option<Uuid> {
        self.document_id
    }

    pub fn set_document_id(&mut self, value: Option<Uuid>) {
        self.document_id = value;
    }

    pub fn invoice_discount_allocation(&self) -> Option<f64> {
        self.invoice_discount_allocation
    }

    pub fn set_invoice_discount_allocation(&mut self, value: Option<f64>) {
        self.invoice_discount_allocation = value;
    }

    pub fn invoiced_quantity(&self) -> Option<f64> {
        self.invoiced_quantity
    }

    pub fn set_invoiced_quantity(&mut self, value: Option<f64>) {
        self.invoiced_quantity = value;
    }

    pub fn invoice_quantity(&self) -> Option<f64> {
        self.invoice_quantity
    }

    pub fn set_invoice_quantity(&mut self, value: Option<f64>) {
        self.invoice_quantity = value;
    }

    pub fn item_id(&self) -> Option<Uuid> {
        self.item_id
    }

    pub fn set_item_id(&mut self, value: Option<Uuid>) {
        self.item_id = value;
    }

    pub fn line_type(&self) -> Option<&str> {
        self.line_type.as_deref()
    }

    pub fn set_line_type(&mut self, value: Option<String>) {
        self.line_type = value;
    }

    pub fn net_amount(&self) -> Option<f64> {
        self.net_amount
    }

    pub fn set_net_amount(&mut self, value: Option<f64>) {
        self.net_amount = value;
    }

    pub fn net_amount_including_tax(&self) -> Option<f64> {
        self.net_amount_including_tax
    }

    pub fn set_net_amount_including_tax(&mut self, value: Option<f64>) {
        self.net_amount_including_tax = value;
    }

    pub fn net_tax_amount(&self) -> Option<f64> {
        self.net_tax_amount
    }

    pub fn set_net_tax_amount(&mut self, value: Option<f64>) {
        self.net_tax_amount = value;
    }

    pub fn quantity(&self) -> Option<f64> {
        self.quantity
    }

    pub fn set_quantity(&mut self, value: Option<f64>) {
        self.quantity = value;
    }

    pub fn sequence(&self) -> Option<i32> {
        self.sequence
    }

    pub fn set_sequence(&mut self, value: Option<i32>) {
        self.sequence = value;
    }

    pub fn shipment_date(&self) -> Option<NaiveDate> {
        self.shipment_date
    }

    pub fn set_shipment_date(&mut self, value: Option<NaiveDate>) {
        self.shipment_date = value;
    }

    pub fn shipped_quantity(&self) -> Option<f64> {
        self.shipped_quantity
    }

    pub fn set_shipped_quantity(&mut self, value: Option<f64>) {
        self.shipped_quantity = value;
    }

    pub fn ship_quantity(&self) -> Option<f64> {
        self.ship_quantity
    }

    pub fn set_ship_quantity(&mut self, value: Option<f64>) {
        self.ship_quantity = value;
    }

    pub fn tax_code(&self) -> Option<&str> {
        self.tax_code.as_deref()
    }

    pub fn set_tax_code(&mut self, value: Option<String>) {
        self.tax_code = value;
    }

    pub fn tax_percent(&self) -> Option<f64> {
        self.tax_percent
    }

    pub fn set_tax_percent(&mut self, value: Option<f64>) {
        self.tax_percent = value;
    }

    pub fn total_tax_amount(&self) -> Option<f64> {
        self.total_tax_amount
    }

    pub fn set_total_tax_amount(&mut self, value: Option<f64>) {
        self.total_tax_amount = value;
    }

    pub fn unit_of_measure_id(&self) -> Option<Uuid> {
        self.unit_of_measure_id
    }

    pub fn set_unit_of_measure_id(&mut self, value: Option<Uuid>) {
        self.unit_of_measure_id = value;
    }

    pub fn unit_price(&self) -> Option<f64> {
        self.unit_price
    }

    pub fn set_unit_price(&mut self, value: Option<f64>) {
        self.unit_price = value;
    }
}

impl Parsable for SalesOrderLine {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, DecodeError> {
        match name {
            "accountId" => assign_present(&mut self.account_id, node.get_uuid_value()?),
            "amountExcludingTax" => assign_present(&mut self.amount_excluding_tax, node.get_f64_value()?),
            "amountIncludingTax" => assign_present(&mut self.amount_including_tax, node.get_f64_value()?),
            "description" => assign_present(&mut self.description, node.get_string_value()?),
            "discountAmount" => assign_present(&mut self.discount_amount, node.get_f64_value()?),
            "discountAppliedBeforeTax" => assign_present(&mut self.discount_applied_before_tax, node.get_bool_value()?),
            "discountPercent" => assign_present(&mut self.discount_percent, node.get_f64_value()?),
            "documentId" => assign_present(&mut self.document_id, node.get_uuid_value()?),
            "invoiceDiscountAllocation" => assign_present(&mut self.invoice_discount_allocation, node.get_f64_value()?),
            "invoicedQuantity" => assign_present(&mut self.invoiced_quantity, node.get_f64_value()?),
            "invoiceQuantity" => assign_present(&mut self.invoice_quantity, node.get_f64_value()?),
            "itemId" => assign_present(&mut self.item_id, node.get_uuid_value()?),
            "lineType" => assign_present(&mut self.line_type, node.get_string_value()?),
            "netAmount" => assign_present(&mut self.net_amount, node.get_f64_value()?),
            "netAmountIncludingTax" => assign_present(&mut self.net_amount_including_tax, node.get_f64_value()?),
            "netTaxAmount" => assign_present(&mut self.net_tax_amount, node.get_f64_value()?),
            "quantity" => assign_present(&mut self.quantity, node.get_f64_value()?),
            "sequence" => assign_present(&mut self.sequence, node.get_i32_value()?),
            "shipmentDate" => assign_present(&mut self.shipment_date, node.get_date_only_value()?),
            "shippedQuantity" => assign_present(&mut self.shipped_quantity, node.get_f64_value()?),
            "shipQuantity" => assign_present(&mut self.ship_quantity, node.get_f64_value()?),
            "taxCode" => assign_present(&mut self.tax_code, node.get_string_value()?),
            "taxPercent" => assign_present(&mut self.tax_percent, node.get_f64_value()?),
            "totalTaxAmount" => assign_present(&mut self.total_tax_amount, node.get_f64_value()?),
            "unitOfMeasureId" => assign_present(&mut self.unit_of_measure_id, node.get_uuid_value()?),
            "unitPrice" => assign_present(&mut self.unit_price, node.get_f64_value()?),
            _ => return self.entity.deserialize_field(name, node),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), EncodeError> {
        self.entity.serialize_fields(writer)?;
        writer.write_uuid_value("accountId", self.account_id)?;
        writer.write_f64_value("amountExcludingTax", self.amount_excluding_tax)?;
        writer.write_f64_value("amountIncludingTax", self.amount_including_tax)?;
        writer.write_string_value("description", self.description())?;
        writer.write_f64_value("discountAmount", self.discount_amount)?;
        writer.write_bool_value("discountAppliedBeforeTax", self.discount_applied_before_tax)?;
        writer.write_f64_value("discountPercent", self.discount_percent)?;
        writer.write_uuid_value("documentId", self.document_id)?;
        writer.write_f64_value("invoiceDiscountAllocation", self.invoice_discount_allocation)?;
        writer.write_f64_value("invoicedQuantity", self.invoiced_quantity)?;
        writer.write_f64_value("invoiceQuantity", self.invoice_quantity)?;
        writer.write_uuid_value("itemId", self.item_id)?;
        writer.write_string_value("lineType", self.line_type())?;
        writer.write_f64_value("netAmount", self.net_amount)?;
        writer.write_f64_value("netAmountIncludingTax", self.net_amount_including_tax)?;
        writer.write_f64_value("netTaxAmount", self.net_tax_amount)?;
        writer.write_f64_value("quantity", self.quantity)?;
        writer.write_i32_value("sequence", self.sequence)?;
        writer.write_date_only_value("shipmentDate", self.shipment_date)?;
        writer.write_f64_value("shippedQuantity", self.shipped_quantity)?;
        writer.write_f64_value("shipQuantity", self.ship_quantity)?;
        writer.write_string_value("taxCode", self.tax_code())?;
        writer.write_f64_value("taxPercent", self.tax_percent)?;
        writer.write_f64_value("totalTaxAmount", self.total_tax_amount)?;
        writer.write_uuid_value("unitOfMeasureId", self.unit_of_measure_id)?;
        writer.write_f64_value("unitPrice", self.unit_price)?;
        writer.write_additional_data(self.additional_data())
    }

    delegate_parsable_base!(entity);
}
